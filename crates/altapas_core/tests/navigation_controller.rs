use altapas_core::{
    ActivationOutcome, MemoryPage, NavCommand, NavigateOptions, NavigationIntent, PageSurface,
    SectionId, SectionNavigator, SiteConfig,
};

const SECTIONS: [&str; 4] = ["home", "menu", "about", "contact"];

fn setup() -> SectionNavigator<MemoryPage> {
    SectionNavigator::new(MemoryPage::new(&SECTIONS), SiteConfig::default())
}

fn setup_at(fragment: &str) -> SectionNavigator<MemoryPage> {
    SectionNavigator::new(
        MemoryPage::new(&SECTIONS).at_fragment(fragment),
        SiteConfig::default(),
    )
}

#[test]
fn activate_known_section_leaves_exactly_one_visible() {
    let mut nav = setup();
    for id in SECTIONS {
        let outcome = nav.activate(&SectionId::new(id));
        assert_eq!(outcome, ActivationOutcome::Shown);
        assert_eq!(nav.page().visible_sections(), vec![id]);
    }
}

#[test]
fn activate_unknown_section_hides_everything_without_panicking() {
    let mut nav = setup();
    nav.activate(&SectionId::new("menu"));

    for unknown in ["specials", "", "Menu", "navbar"] {
        let outcome = nav.activate(&SectionId::new(unknown));
        assert_eq!(outcome, ActivationOutcome::Missing);
        assert!(nav.page().visible_sections().is_empty());
        assert_eq!(nav.active_section(), None);
    }
}

#[test]
fn activate_sets_per_section_title() {
    let mut nav = setup();
    nav.activate(&SectionId::new("contact"));
    assert_eq!(
        nav.page().title(),
        "Contact | Al Tapas Lisbon - Location & Reservations"
    );
}

#[test]
fn section_without_configured_title_uses_home_title() {
    let mut nav = SectionNavigator::new(
        MemoryPage::new(&["home", "gallery"]),
        SiteConfig::default(),
    );
    nav.activate(&SectionId::new("gallery"));
    assert_eq!(
        nav.page().title(),
        "Al Tapas Lisbon | Authentic Tapas Restaurant in Lisboa"
    );
}

#[test]
fn navigate_with_history_writes_fragment() {
    let mut nav = setup();
    nav.navigate(
        &SectionId::new("about"),
        NavigateOptions {
            update_history: true,
            scroll_to_top: false,
        },
    );
    assert_eq!(nav.page().fragment(), "#about");
    assert_eq!(nav.page().scroll_to_top_count(), 0);
}

#[test]
fn navigate_without_history_leaves_fragment_alone() {
    let mut nav = setup_at("#menu");
    nav.navigate(&SectionId::new("about"), NavigateOptions::default());
    assert_eq!(nav.page().fragment(), "#menu");
    assert_eq!(nav.page().history_len(), 1);
}

#[test]
fn resolve_initial_reads_fragment() {
    let mut nav = setup_at("#about");
    assert_eq!(nav.resolve_initial(), ActivationOutcome::Shown);
    assert_eq!(nav.page().visible_sections(), vec!["about"]);
    assert_eq!(
        nav.page().title(),
        "About Us | Al Tapas - Authentic Iberian Culture in Lisbon"
    );
    assert_eq!(nav.page().active_links(), vec!["#about"]);
    assert_eq!(nav.page().history_len(), 1);
}

#[test]
fn resolve_initial_defaults_to_home() {
    for fragment in ["", "#"] {
        let mut nav = setup_at(fragment);
        nav.resolve_initial();
        assert_eq!(nav.active_section(), Some(&SectionId::home()));
        assert_eq!(nav.page().active_links(), vec!["#home"]);
    }
}

#[test]
fn resolve_initial_with_unknown_fragment_degrades_to_blank() {
    let mut nav = setup_at("#reservations");
    assert_eq!(nav.resolve_initial(), ActivationOutcome::Missing);
    assert!(nav.page().visible_sections().is_empty());
    assert!(nav.page().active_links().is_empty());
}

#[test]
fn two_link_clicks_leave_only_second_link_active() {
    let mut nav = setup();
    for href in ["#menu", "#contact"] {
        nav.handle_intent(&NavigationIntent::NavLink {
            href: href.to_string(),
        })
        .expect("in-page link navigates");
    }
    assert_eq!(nav.page().active_links(), vec!["#contact"]);
    assert_eq!(nav.page().fragment(), "#contact");
}

#[test]
fn set_active_link_marks_every_matching_link() {
    let page = MemoryPage::with_links(
        &SECTIONS,
        vec![
            "#home".to_string(),
            "#menu".to_string(),
            "#menu".to_string(),
            "/shop".to_string(),
        ],
    );
    let mut nav = SectionNavigator::new(page, SiteConfig::default());
    nav.set_active_link(&SectionId::new("menu"));
    assert_eq!(nav.page().active_links(), vec!["#menu", "#menu"]);

    nav.set_active_link(&SectionId::new("unknown"));
    assert!(nav.page().active_links().is_empty());
}

#[test]
fn footer_link_scrolls_to_top_and_pushes_history() {
    let mut nav = setup();
    let outcome = nav.handle_intent(&NavigationIntent::FooterLink {
        href: "#contact".to_string(),
    });
    assert_eq!(outcome, Some(ActivationOutcome::Shown));
    assert_eq!(nav.page().scroll_to_top_count(), 1);
    assert_eq!(nav.page().fragment(), "#contact");
}

#[test]
fn call_to_action_opens_menu_section() {
    let mut nav = setup();
    nav.handle_intent(&NavigationIntent::CallToAction);
    assert_eq!(nav.page().visible_sections(), vec!["menu"]);
    assert_eq!(nav.page().active_links(), vec!["#menu"]);
    assert_eq!(nav.page().fragment(), "#menu");
}

#[test]
fn external_link_intent_changes_nothing() {
    let mut nav = setup_at("#about");
    nav.resolve_initial();
    let outcome = nav.handle_intent(&NavigationIntent::NavLink {
        href: "https://example.com/menu.pdf".to_string(),
    });
    assert_eq!(outcome, None);
    assert_eq!(nav.page().visible_sections(), vec!["about"]);
    assert_eq!(nav.page().history_len(), 1);
}

#[test]
fn dispatch_replays_commands_last_write_wins() {
    let mut nav = setup();
    let commands = ["menu", "about", "home", "contact"].map(|id| NavCommand::ActivateSection {
        id: SectionId::new(id),
        options: NavigateOptions::default(),
    });
    for command in commands {
        nav.dispatch(command);
    }
    assert_eq!(nav.page().visible_sections(), vec!["contact"]);
    assert_eq!(nav.page().active_links(), vec!["#contact"]);
}

#[test]
fn shown_sections_are_announced() {
    let mut nav = setup();
    nav.activate(&SectionId::new("menu"));
    nav.activate(&SectionId::new("missing"));
    assert_eq!(
        nav.page().announcements(),
        &["Navigated to menu section".to_string()]
    );
}
