//! CLI smoke and replay entry point.
//!
//! # Responsibility
//! - Verify `altapas_core` linkage with a deterministic ping/version probe.
//! - Replay a navigation sequence against the in-memory page and print the
//!   resulting state after every step.
//!
//! Usage: `altapas_cli [step ...]` where a step is `<id>` or `#<id>` (nav
//! link), `footer:<id>`, `cta`, `back` or `forward`.

use altapas_core::{MemoryPage, NavigationIntent, SectionNavigator, SiteConfig};

const SITE_SECTIONS: [&str; 4] = ["home", "menu", "about", "contact"];

fn main() {
    println!("altapas_core ping={}", altapas_core::ping());
    println!("altapas_core version={}", altapas_core::core_version());

    let steps = std::env::args().skip(1).collect::<Vec<_>>();
    if steps.is_empty() {
        return;
    }

    let mut nav = SectionNavigator::new(MemoryPage::new(&SITE_SECTIONS), SiteConfig::default());
    nav.handle_intent(&NavigationIntent::InitialLoad);
    print_state("load", &nav);
    for step in &steps {
        apply_step(&mut nav, step);
        print_state(step, &nav);
    }
}

fn apply_step(nav: &mut SectionNavigator<MemoryPage>, step: &str) {
    let intent = match step {
        "cta" => NavigationIntent::CallToAction,
        "back" | "forward" => {
            let moved = if step == "back" {
                nav.page_mut().back()
            } else {
                nav.page_mut().forward()
            };
            if !moved {
                return;
            }
            NavigationIntent::HistoryPop
        }
        _ => match step.strip_prefix("footer:") {
            Some(id) => NavigationIntent::FooterLink {
                href: format!("#{}", id.trim_start_matches('#')),
            },
            None => NavigationIntent::NavLink {
                href: format!("#{}", step.trim_start_matches('#')),
            },
        },
    };
    nav.handle_intent(&intent);
}

fn print_state(step: &str, nav: &SectionNavigator<MemoryPage>) {
    use altapas_core::PageSurface;

    let page = nav.page();
    println!(
        "step={step} active={} fragment={:?} title={:?}",
        nav.active_section().map_or("-", |id| id.as_str()),
        page.fragment(),
        page.title()
    );
}
