// DOM contract of the page: selectors, ids, class names and attributes.
//
// The markup and stylesheet are owned elsewhere; these names are the only
// coupling to them.

// Cursor
pub const CURSOR_DOT: &str = ".cursor-dot";
pub const CURSOR_OUTLINE: &str = ".cursor-outline";
pub const HOVER_TARGETS: &str = ".hover-target";
pub const NAV_HOVER_LINKS: &str = ".nav-link, .mobile-link";

// Navigation
pub const MAIN_NAV_ID: &str = "main-nav";
pub const HAMBURGER_ID: &str = "hamburger-btn";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_LINKS: &str = ".mobile-link";
pub const DESKTOP_NAV_LINKS: &str = ".desktop-menu .nav-link";
pub const SECTION_REGIONS: &str = "section, footer";

// Scroll reveal
pub const REVEAL_TARGETS: &str = ".reveal-text, .reveal-up";

// Gallery preview
pub const GALLERY_ID: &str = "gallery";
pub const PREVIEW_ID: &str = "work-preview";
pub const PREVIEW_IMG_ID: &str = "work-preview-img";
pub const PROJECT_ITEMS: &str = ".project-item";
pub const PROJECT_NAME: &str = ".p-name"; // title fallback inside a project item

// Media modal
pub const MEDIA_MODAL_ID: &str = "universal-modal";
pub const MEDIA_MODAL_IMG_ID: &str = "modal-img";
pub const MEDIA_MODAL_TITLE_ID: &str = "modal-title";
pub const MEDIA_MODAL_DESC_ID: &str = "modal-desc";
pub const MEDIA_MODAL_CLOSE: &str = ".modal-close";
pub const BENTO_CARDS: &str = ".bento-card";
pub const BENTO_BG: &str = ".bento-bg";

// Detail (bio) modal
pub const DETAIL_MODAL_ID: &str = "personal-details-modal";
pub const DETAIL_OPEN_ID: &str = "open-personal-details";
pub const DETAIL_CLOSE_ID: &str = "close-details";

// Page chrome
pub const PRELOADER: &str = ".preloader";
pub const CLOCK_ID: &str = "clock";
pub const SKILL_CARDS: &str = ".color-card";

// Class flags
pub const CLASS_HOVERING: &str = "hovering";
pub const CLASS_NAV_HOVERED: &str = "nav-hovered";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_OPEN: &str = "open";
pub const CLASS_CLOSING: &str = "closing";
pub const CLASS_NO_SCROLL: &str = "no-scroll";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_IN_VIEW: &str = "in-view";
pub const CLASS_FADE_OUT: &str = "fade-out";
pub const CLASS_SKILL_POP: &str = "skill-pop";

// Content attributes
pub const ATTR_IMG: &str = "data-img";
pub const ATTR_TITLE: &str = "data-title";
pub const ATTR_DESC: &str = "data-desc";
