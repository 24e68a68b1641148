//! CTA Localization
//!
//! Call-to-action button text for story-ad placements. Advertisers either
//! pick one of the predefined CTA choices, which localize through the
//! string table, or supply custom text that is treated as already
//! localized.

use std::collections::HashMap;

/// Predefined CTA button choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CtaType {
    ApplyNow,
    BookNow,
    BuyTickets,
    Download,
    Explore,
    GetNow,
    Install,
    LearnMore,
    Listen,
    More,
    OpenApp,
    OrderNow,
    Play,
    Read,
    Shop,
    Showtimes,
    SignUp,
    Subscribe,
    UseApp,
    Watch,
    WatchEpisode,
}

impl CtaType {
    /// Parse a predefined CTA key, None for custom text
    pub fn from_key(key: &str) -> Option<Self> {
        Some(match key {
            "APPLY_NOW" => Self::ApplyNow,
            "BOOK_NOW" => Self::BookNow,
            "BUY_TICKETS" => Self::BuyTickets,
            "DOWNLOAD" => Self::Download,
            "EXPLORE" => Self::Explore,
            "GET_NOW" => Self::GetNow,
            "INSTALL" => Self::Install,
            "LEARN_MORE" => Self::LearnMore,
            "LISTEN" => Self::Listen,
            "MORE" => Self::More,
            "OPEN_APP" => Self::OpenApp,
            "ORDER_NOW" => Self::OrderNow,
            "PLAY" => Self::Play,
            "READ" => Self::Read,
            "SHOP" => Self::Shop,
            "SHOWTIMES" => Self::Showtimes,
            "SIGN_UP" => Self::SignUp,
            "SUBSCRIBE" => Self::Subscribe,
            "USE_APP" => Self::UseApp,
            "WATCH" => Self::Watch,
            "WATCH_EPISODE" => Self::WatchEpisode,
            _ => return None,
        })
    }

    /// String id of this CTA's button label
    pub fn string_id(self) -> LocalizedStringId {
        match self {
            Self::ApplyNow => LocalizedStringId::CtaApplyNow,
            Self::BookNow => LocalizedStringId::CtaBookNow,
            Self::BuyTickets => LocalizedStringId::CtaBuyTickets,
            Self::Download => LocalizedStringId::CtaDownload,
            Self::Explore => LocalizedStringId::CtaExplore,
            Self::GetNow => LocalizedStringId::CtaGetNow,
            Self::Install => LocalizedStringId::CtaInstall,
            Self::LearnMore => LocalizedStringId::CtaLearnMore,
            Self::Listen => LocalizedStringId::CtaListen,
            Self::More => LocalizedStringId::CtaMore,
            Self::OpenApp => LocalizedStringId::CtaOpenApp,
            Self::OrderNow => LocalizedStringId::CtaOrderNow,
            Self::Play => LocalizedStringId::CtaPlay,
            Self::Read => LocalizedStringId::CtaRead,
            Self::Shop => LocalizedStringId::CtaShop,
            Self::Showtimes => LocalizedStringId::CtaShowtimes,
            Self::SignUp => LocalizedStringId::CtaSignUp,
            Self::Subscribe => LocalizedStringId::CtaSubscribe,
            Self::UseApp => LocalizedStringId::CtaUseApp,
            Self::Watch => LocalizedStringId::CtaWatch,
            Self::WatchEpisode => LocalizedStringId::CtaWatchEpisode,
        }
    }
}

/// Ids for localizable button labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalizedStringId {
    CtaApplyNow,
    CtaBookNow,
    CtaBuyTickets,
    CtaDownload,
    CtaExplore,
    CtaGetNow,
    CtaInstall,
    CtaLearnMore,
    CtaListen,
    CtaMore,
    CtaOpenApp,
    CtaOrderNow,
    CtaPlay,
    CtaRead,
    CtaShop,
    CtaShowtimes,
    CtaSignUp,
    CtaSubscribe,
    CtaUseApp,
    CtaWatch,
    CtaWatchEpisode,
}

/// Source of localized strings
pub trait LocalizationService {
    fn localized_string(&self, id: LocalizedStringId) -> Option<String>;
}

/// In-memory string table
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    strings: HashMap<LocalizedStringId, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// English button labels
    pub fn english() -> Self {
        let mut table = Self::new();
        table.set(LocalizedStringId::CtaApplyNow, "Apply Now");
        table.set(LocalizedStringId::CtaBookNow, "Book Now");
        table.set(LocalizedStringId::CtaBuyTickets, "Buy Tickets");
        table.set(LocalizedStringId::CtaDownload, "Download");
        table.set(LocalizedStringId::CtaExplore, "Explore Now");
        table.set(LocalizedStringId::CtaGetNow, "Get Now");
        table.set(LocalizedStringId::CtaInstall, "Install Now");
        table.set(LocalizedStringId::CtaLearnMore, "Learn More");
        table.set(LocalizedStringId::CtaListen, "Listen Now");
        table.set(LocalizedStringId::CtaMore, "More");
        table.set(LocalizedStringId::CtaOpenApp, "Open App");
        table.set(LocalizedStringId::CtaOrderNow, "Order Now");
        table.set(LocalizedStringId::CtaPlay, "Play");
        table.set(LocalizedStringId::CtaRead, "Read Now");
        table.set(LocalizedStringId::CtaShop, "Shop Now");
        table.set(LocalizedStringId::CtaShowtimes, "Showtimes");
        table.set(LocalizedStringId::CtaSignUp, "Sign Up");
        table.set(LocalizedStringId::CtaSubscribe, "Subscribe Now");
        table.set(LocalizedStringId::CtaUseApp, "Use App");
        table.set(LocalizedStringId::CtaWatch, "Watch");
        table.set(LocalizedStringId::CtaWatchEpisode, "Watch Episode");
        table
    }

    pub fn set(&mut self, id: LocalizedStringId, text: impl Into<String>) {
        self.strings.insert(id, text.into());
    }
}

impl LocalizationService for StringTable {
    fn localized_string(&self, id: LocalizedStringId) -> Option<String> {
        self.strings.get(&id).cloned()
    }
}

/// Localize CTA text chosen from the predefined set
///
/// Custom CTA text is returned unchanged: it is assumed to already be
/// localized. A predefined choice the service has no string for yields
/// None.
pub fn localize_cta_text(cta_type: &str, service: &dyn LocalizationService) -> Option<String> {
    match CtaType::from_key(cta_type) {
        Some(cta) => service.localized_string(cta.string_id()),
        None => Some(cta_type.to_string()),
    }
}
