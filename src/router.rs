//! Page routing
//!
//! Every page of the portal is a `Page` value. The `Router` maps pages to the
//! view that renders them and always has a home fallback, so resolving a tag
//! can never fail. The `Navigator` holds the single current page.

use std::collections::HashMap;
use std::fmt;

use crate::models::{Catalog, ModuleId};

/// Printable quick-reference sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheatSheetId {
    IncidentResponse,
    Phishing,
    Password,
    SocialEngineering,
}

impl CheatSheetId {
    pub const ALL: [CheatSheetId; 4] = [
        CheatSheetId::IncidentResponse,
        CheatSheetId::Phishing,
        CheatSheetId::Password,
        CheatSheetId::SocialEngineering,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            CheatSheetId::IncidentResponse => "incident-response",
            CheatSheetId::Phishing => "phishing",
            CheatSheetId::Password => "password",
            CheatSheetId::SocialEngineering => "social-engineering",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.tag() == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Training,
    Threats,
    Report,
    Policies,
    Resources,
    Contact,
    About,
    News,
    Module(ModuleId),
    PasswordGuidelines,
    IncidentResponseGuide,
    SpotThreats,
    CheatSheet(CheatSheetId),
}

impl Page {
    /// Pages listed in the header navigation bar, in order
    pub const NAV: [Page; 8] = [
        Page::Home,
        Page::Training,
        Page::Threats,
        Page::Report,
        Page::Policies,
        Page::Contact,
        Page::About,
        Page::News,
    ];

    /// Parse a page tag such as `home` or `module-phishing`.
    ///
    /// This is purely syntactic: `module-<id>` parses for any non-empty id.
    /// Whether the page exists is the router's business.
    pub fn parse(tag: &str) -> Option<Self> {
        let page = match tag {
            "home" => Page::Home,
            "training" => Page::Training,
            "threats" => Page::Threats,
            "report" => Page::Report,
            "policies" => Page::Policies,
            "resources" => Page::Resources,
            "contact" => Page::Contact,
            "about" => Page::About,
            "news" => Page::News,
            "password-guidelines" => Page::PasswordGuidelines,
            "incident-response-guide" => Page::IncidentResponseGuide,
            "spot-threats" => Page::SpotThreats,
            _ => {
                if let Some(id) = tag.strip_prefix("module-").filter(|id| !id.is_empty()) {
                    Page::Module(ModuleId::new(id))
                } else if let Some(id) = tag.strip_prefix("cheatsheet-") {
                    Page::CheatSheet(CheatSheetId::parse(id)?)
                } else {
                    return None;
                }
            }
        };
        Some(page)
    }

    pub fn tag(&self) -> String {
        match self {
            Page::Home => "home".to_string(),
            Page::Training => "training".to_string(),
            Page::Threats => "threats".to_string(),
            Page::Report => "report".to_string(),
            Page::Policies => "policies".to_string(),
            Page::Resources => "resources".to_string(),
            Page::Contact => "contact".to_string(),
            Page::About => "about".to_string(),
            Page::News => "news".to_string(),
            Page::Module(id) => format!("module-{id}"),
            Page::PasswordGuidelines => "password-guidelines".to_string(),
            Page::IncidentResponseGuide => "incident-response-guide".to_string(),
            Page::SpotThreats => "spot-threats".to_string(),
            Page::CheatSheet(id) => format!("cheatsheet-{}", id.tag()),
        }
    }

    /// Short label for the header navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Training => "Training",
            Page::Threats => "Threat Intel",
            Page::Report => "Report",
            Page::Policies | Page::Resources => "Policies",
            Page::Contact => "Contact",
            Page::About => "About",
            Page::News => "News",
            Page::Module(_) => "Module",
            Page::PasswordGuidelines => "Passwords",
            Page::IncidentResponseGuide => "IR Guide",
            Page::SpotThreats => "Spot Threats",
            Page::CheatSheet(_) => "Cheat Sheet",
        }
    }

    /// Header tab that should be highlighted while this page is shown
    pub fn nav_section(&self) -> Page {
        match self {
            Page::Module(_) => Page::Training,
            Page::Resources
            | Page::CheatSheet(_)
            | Page::PasswordGuidelines
            | Page::IncidentResponseGuide => Page::Policies,
            Page::SpotThreats => Page::Threats,
            other => other.clone(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

/// Which renderer draws a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Training,
    Threats,
    Report,
    Policies,
    Contact,
    About,
    News,
    Module(ModuleId),
    PasswordGuidelines,
    IncidentResponseGuide,
    SpotThreats,
    CheatSheet(CheatSheetId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescriptor {
    /// Canonical page for this view
    pub page: Page,
    pub title: String,
    pub kind: ViewKind,
}

impl ViewDescriptor {
    fn new(page: Page, title: impl Into<String>, kind: ViewKind) -> Self {
        Self {
            page,
            title: title.into(),
            kind,
        }
    }
}

/// Lookup table from page to view, with a guaranteed home entry
#[derive(Debug, Clone)]
pub struct Router {
    table: HashMap<Page, ViewDescriptor>,
    home: ViewDescriptor,
}

impl Router {
    /// Build the table for the fixed pages plus one entry per catalog module
    pub fn new(catalog: &Catalog) -> Self {
        let home = ViewDescriptor::new(Page::Home, "SecureGuard", ViewKind::Home);
        let mut table = HashMap::new();

        let fixed = [
            (Page::Home, "SecureGuard", ViewKind::Home),
            (Page::Training, "Security Training", ViewKind::Training),
            (Page::Threats, "Threat Intelligence", ViewKind::Threats),
            (Page::Report, "Report an Incident", ViewKind::Report),
            (Page::Policies, "Policies & Resources", ViewKind::Policies),
            (Page::Contact, "Contact the Security Team", ViewKind::Contact),
            (Page::About, "About SecureGuard", ViewKind::About),
            (Page::News, "News & Events", ViewKind::News),
            (
                Page::PasswordGuidelines,
                "Password Guidelines",
                ViewKind::PasswordGuidelines,
            ),
            (
                Page::IncidentResponseGuide,
                "Incident Response Guide",
                ViewKind::IncidentResponseGuide,
            ),
            (Page::SpotThreats, "Spot the Threats", ViewKind::SpotThreats),
        ];
        for (page, title, kind) in fixed {
            table.insert(page.clone(), ViewDescriptor::new(page, title, kind));
        }

        // resources is an alias of policies
        table.insert(
            Page::Resources,
            ViewDescriptor::new(Page::Policies, "Policies & Resources", ViewKind::Policies),
        );

        for id in CheatSheetId::ALL {
            let page = Page::CheatSheet(id);
            let title = crate::pages::cheat_sheet(id).title;
            table.insert(
                page.clone(),
                ViewDescriptor::new(page, title, ViewKind::CheatSheet(id)),
            );
        }

        for module in &catalog.modules {
            let page = Page::Module(module.id.clone());
            table.insert(
                page.clone(),
                ViewDescriptor::new(page, module.title.clone(), ViewKind::Module(module.id.clone())),
            );
        }

        tracing::debug!(routes = table.len(), "router table built");
        Self { table, home }
    }

    /// Resolve a page tag to a view. Never fails: anything unknown is home.
    pub fn resolve(&self, tag: &str) -> &ViewDescriptor {
        Page::parse(tag)
            .map(|page| self.view(&page))
            .unwrap_or(&self.home)
    }

    pub fn view(&self, page: &Page) -> &ViewDescriptor {
        self.table.get(page).unwrap_or(&self.home)
    }

    pub fn contains(&self, page: &Page) -> bool {
        self.table.contains_key(page)
    }
}

/// The single current page plus its scroll offset
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Page,
    pub scroll: u16,
}

impl Navigator {
    pub fn new(start: Page) -> Self {
        Self {
            current: start,
            scroll: 0,
        }
    }

    pub fn current(&self) -> &Page {
        &self.current
    }

    /// Show `page` and scroll back to the top.
    /// Returns whether the page actually changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        self.scroll = 0;
        if self.current == page {
            return false;
        }
        tracing::info!(from = %self.current, to = %page, "navigate");
        self.current = page;
        true
    }

    /// Navigate by tag, going through the router so the result always exists
    pub fn navigate_tag(&mut self, router: &Router, tag: &str) -> bool {
        let page = router.resolve(tag).page.clone();
        self.navigate(page)
    }

    pub fn enter_module(&mut self, id: ModuleId) -> bool {
        self.navigate(Page::Module(id))
    }

    pub fn exit_module(&mut self) -> bool {
        self.navigate(Page::Training)
    }

    pub fn scroll_by(&mut self, delta: i16) {
        self.scroll = self.scroll.saturating_add_signed(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn router() -> Router {
        Router::new(&Catalog::embedded().unwrap())
    }

    #[test]
    fn test_parse_and_tag_agree() {
        let pages = [
            Page::Home,
            Page::Resources,
            Page::Module(ModuleId::new("phishing")),
            Page::CheatSheet(CheatSheetId::SocialEngineering),
            Page::IncidentResponseGuide,
        ];
        for page in pages {
            assert_eq!(Page::parse(&page.tag()), Some(page));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Page::parse(""), None);
        assert_eq!(Page::parse("module-"), None);
        assert_eq!(Page::parse("cheatsheet-unknown"), None);
        assert_eq!(Page::parse("Home"), None);
    }

    #[test]
    fn test_resolve_known_pages() {
        let router = router();
        assert_eq!(router.resolve("training").kind, ViewKind::Training);
        assert_eq!(
            router.resolve("module-ransomware").kind,
            ViewKind::Module(ModuleId::new("ransomware"))
        );
        assert_eq!(
            router.resolve("cheatsheet-password").kind,
            ViewKind::CheatSheet(CheatSheetId::Password)
        );
    }

    #[test]
    fn test_resources_aliases_policies() {
        let router = router();
        let view = router.resolve("resources");
        assert_eq!(view.kind, ViewKind::Policies);
        assert_eq!(view.page, Page::Policies);
    }

    #[test]
    fn test_unknown_tags_resolve_home() {
        let router = router();
        for tag in ["", "nope", "module-unknown", "cheatsheet-x", "MODULE-phishing"] {
            assert_eq!(router.resolve(tag).kind, ViewKind::Home, "tag {tag:?}");
        }
    }

    #[test]
    fn test_navigate_module_then_unknown_goes_home() {
        let router = router();
        let mut nav = Navigator::default();

        assert!(nav.navigate_tag(&router, "module-phishing"));
        assert_eq!(nav.current(), &Page::Module(ModuleId::new("phishing")));

        assert!(nav.navigate_tag(&router, "unknown-tag"));
        assert_eq!(nav.current(), &Page::Home);
    }

    #[test]
    fn test_navigate_same_page_resets_scroll_only() {
        let mut nav = Navigator::new(Page::News);
        nav.scroll_by(12);
        assert!(!nav.navigate(Page::News));
        assert_eq!(nav.scroll, 0);
    }

    #[test]
    fn test_enter_and_exit_module() {
        let mut nav = Navigator::default();
        nav.enter_module(ModuleId::new("phishing"));
        assert_eq!(nav.current().nav_section(), Page::Training);
        nav.exit_module();
        assert_eq!(nav.current(), &Page::Training);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut nav = Navigator::default();
        nav.scroll_by(-3);
        assert_eq!(nav.scroll, 0);
        nav.scroll_by(5);
        assert_eq!(nav.scroll, 5);
    }

    proptest! {
        #[test]
        fn prop_resolve_is_total(tag in ".*") {
            let router = router();
            let view = router.resolve(&tag);
            prop_assert!(router.contains(&view.page));
        }

        #[test]
        fn prop_module_tags_resolve_home_unless_catalogued(id in "[a-z-]{1,20}") {
            let router = router();
            let catalog = Catalog::embedded().unwrap();
            let view = router.resolve(&format!("module-{id}"));
            if catalog.module(&ModuleId::new(id.clone())).is_some() {
                prop_assert_eq!(&view.kind, &ViewKind::Module(ModuleId::new(id)));
            } else {
                prop_assert_eq!(&view.kind, &ViewKind::Home);
            }
        }
    }
}
