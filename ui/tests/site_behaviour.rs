//! Behaviour of the page state and content as seen through the public API,
//! without a renderer.

use ui::core::content::{localized_strings, Project, FILTERS, PROJECTS};
use ui::core::filter::{filter_projects, Category};
use ui::core::lang::Lang;
use ui::core::motion::{ParallaxFrame, SmoothedFrame, SpringConfig};
use ui::core::state::{DeviceClass, UiAction, UiState};

fn ids(projects: &[&Project]) -> Vec<&'static str> {
    projects.iter().map(|p| p.id).collect()
}

#[test]
fn every_content_string_resolves_in_both_languages() {
    let strings = localized_strings();
    assert!(!strings.is_empty());
    for (origin, text) in strings {
        for lang in Lang::ALL {
            assert!(
                !text.get(lang).trim().is_empty(),
                "{origin} is empty for {lang}"
            );
        }
    }
}

#[test]
fn toggling_language_twice_is_identity() {
    for lang in Lang::ALL {
        assert_eq!(lang.toggle().toggle(), lang);
        let state = UiState {
            lang,
            ..UiState::default()
        };
        let back = state
            .apply(UiAction::ToggleLanguage)
            .apply(UiAction::ToggleLanguage);
        assert_eq!(back, state);
    }
}

#[test]
fn filtering_keeps_order_and_never_grows() {
    for category in Category::ALL {
        let visible = filter_projects(&PROJECTS, category);
        assert!(visible.len() <= PROJECTS.len());

        if category == Category::All {
            assert_eq!(visible.len(), PROJECTS.len());
        } else {
            assert!(visible.iter().all(|p| p.category == category));
        }

        // Matches appear in the same relative order as the source list.
        let positions: Vec<usize> = visible
            .iter()
            .map(|p| PROJECTS.iter().position(|q| q.id == p.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{category}: {positions:?}");
    }
}

#[test]
fn dashboard_filter_returns_03_then_05() {
    let visible = filter_projects(&PROJECTS, Category::Dashboard);
    assert_eq!(ids(&visible), vec!["03", "05"]);
}

#[test]
fn all_filter_returns_sample_data_unchanged() {
    let visible = filter_projects(&PROJECTS, Category::All);
    assert_eq!(ids(&visible), vec!["01", "02", "03", "04", "05", "06"]);
}

#[test]
fn filter_chips_cover_every_category_once() {
    let chips: Vec<Category> = FILTERS.iter().map(|f| f.category).collect();
    assert_eq!(chips, Category::ALL.to_vec());
}

#[test]
fn archive_round_trip_preserves_language_and_filter() {
    let start = UiState::default()
        .apply(UiAction::LoadFinished)
        .apply(UiAction::ToggleLanguage)
        .apply(UiAction::SetFilter(Category::Integration));

    let opened = start.apply(UiAction::OpenArchive);
    assert!(opened.archive_open);
    assert_eq!(opened.lang, Lang::En);
    assert_eq!(opened.filter, Category::Integration);

    let closed = opened.apply(UiAction::CloseArchive);
    assert_eq!(closed, start);
}

#[test]
fn escape_closes_overlays_without_touching_selection() {
    let start = UiState::default().apply(UiAction::SetFilter(Category::Web));
    let dismissed = start
        .apply(UiAction::ToggleMenu)
        .apply(UiAction::OpenArchive)
        .apply(UiAction::Dismiss);
    assert!(!dismissed.overlay_open());
    assert_eq!(dismissed.filter, Category::Web);
    assert_eq!(dismissed.lang, start.lang);
}

#[test]
fn scrolling_past_hero_fades_it_on_desktop_only() {
    let desktop = ParallaxFrame::from_scroll(400.0, DeviceClass::Desktop);
    assert!(desktop.hero_opacity.abs() < 1e-9);
    assert!(desktop.backdrop_y > 0.0);

    let mobile = ParallaxFrame::from_scroll(400.0, DeviceClass::Mobile);
    assert_eq!(mobile.backdrop_y, 0.0);
    assert_eq!(mobile.hero_y, 0.0);
}

#[test]
fn smoothed_frame_reaches_synthetic_scroll_target() {
    let target = ParallaxFrame::from_scroll(1000.0, DeviceClass::Desktop);
    let config = SpringConfig::for_device(DeviceClass::Desktop);
    let mut smoothed = SmoothedFrame::default();
    for _ in 0..(60 * 20) {
        if smoothed.is_settled(target) {
            break;
        }
        smoothed = smoothed.step(target, 1.0 / 60.0, config);
    }
    assert!(smoothed.is_settled(target));
    let frame = smoothed.frame();
    assert!((frame.hero_y - target.hero_y).abs() < 1e-2);
    assert!((0.0..=1.0).contains(&frame.hero_opacity));
}
