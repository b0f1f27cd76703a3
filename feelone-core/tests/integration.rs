//! Integration tests for the session flow
//!
//! These tests drive the controller the way the terminal front end does:
//! intents in, clock forward, then inspect the session and mounted screen.

use std::time::Duration;

use feelone_core::config::TimingConfig;
use feelone_core::screen::{EditKey, Screen};
use feelone_core::{Controller, Intent, View, EMOTIONS, PROMPTS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn controller(show_notices: bool, seed: u64) -> Controller<StdRng> {
    feelone_core::logging::init_test();
    Controller::new(
        show_notices,
        TimingConfig::default(),
        StdRng::seed_from_u64(seed),
    )
}

fn type_text(c: &mut Controller<StdRng>, text: &str) {
    for ch in text.chars() {
        c.dispatch(Intent::Edit(EditKey::Char(ch)));
    }
}

/// Log in as "a" and wait for the entry box.
fn reach_ready_input(c: &mut Controller<StdRng>) {
    type_text(c, "a");
    c.dispatch(Intent::Login);
    c.dispatch(Intent::ProceedFromDevNotice);
    assert_eq!(c.view(), View::Input);
    c.advance_by(ms(10_000));
}

fn reach_results(c: &mut Controller<StdRng>) {
    type_text(c, "I feel kind of lost today");
    c.dispatch(Intent::SubmitInput);
    assert_eq!(c.view(), View::Analyzing);
    c.advance_by(ms(3000));
    assert_eq!(c.view(), View::Results);
}

fn assert_invariant(c: &Controller<StdRng>) {
    let session = c.session();
    assert_eq!(
        session.analysis.is_some(),
        session.view == View::Results,
        "analysis must be present exactly on results: {:?}",
        session
    );
    assert_eq!(c.screen().view(), session.view);
}

// ============================================
// Scenarios
// ============================================

#[test]
fn test_full_walkthrough_with_notices() {
    let mut c = controller(true, 11);

    type_text(&mut c, "a");
    c.dispatch(Intent::Login);
    assert_eq!(c.view(), View::DevNotice);
    assert_eq!(c.session().user.as_ref().unwrap().username, "a");

    c.dispatch(Intent::ProceedFromDevNotice);
    assert_eq!(c.view(), View::Input);

    c.advance_by(ms(10_000));
    type_text(&mut c, "I feel kind of lost today");
    c.dispatch(Intent::SubmitInput);
    assert_eq!(c.view(), View::Analyzing);

    c.advance_by(ms(2999));
    assert_eq!(c.view(), View::Analyzing);
    c.advance_by(ms(1));
    assert_eq!(c.view(), View::Results);

    let analysis = c.session().analysis.expect("results must carry an analysis");
    assert!(EMOTIONS.contains(&analysis));
    assert_invariant(&c);
}

#[test]
fn test_short_input_stays_on_input() {
    let mut c = controller(true, 2);
    reach_ready_input(&mut c);

    type_text(&mut c, "   meh     ");
    c.dispatch(Intent::SubmitInput);
    assert_eq!(c.view(), View::Input);

    let Screen::Input(input) = c.screen() else {
        panic!("expected input screen");
    };
    assert!(!input.proceed_enabled());
    assert_eq!(input.text(), "   meh     ");
}

#[test]
fn test_typing_before_ready_is_dropped() {
    let mut c = controller(false, 3);
    type_text(&mut c, "a");
    c.dispatch(Intent::Login);

    type_text(&mut c, "I feel kind of lost today");
    c.dispatch(Intent::SubmitInput);
    assert_eq!(c.view(), View::Input);

    let Screen::Input(input) = c.screen() else {
        panic!("expected input screen");
    };
    assert_eq!(input.text(), "");
}

#[test]
fn test_analyzing_dots_cycle() {
    let mut c = controller(false, 4);
    reach_ready_input(&mut c);
    type_text(&mut c, "I feel kind of lost today");
    c.dispatch(Intent::SubmitInput);

    let mut seen = Vec::new();
    for _ in 0..5 {
        c.advance_by(ms(500));
        let Screen::Analyzing(dots) = c.screen() else {
            panic!("expected analyzing screen");
        };
        seen.push(dots.count());
    }
    assert_eq!(seen, vec![1, 2, 3, 0, 1]);
}

#[test]
fn test_close_resets_count_from_three() {
    let mut c = controller(false, 5);
    reach_ready_input(&mut c);

    for _ in 0..3 {
        reach_results(&mut c);
        c.dispatch(Intent::ExploreAnother);
        c.advance_by(ms(10_000));
    }
    assert_eq!(c.session().session_count, 3);

    reach_results(&mut c);
    c.dispatch(Intent::Close);
    assert_eq!(c.view(), View::Input);
    assert_eq!(c.session().session_count, 0);
    assert!(c.session().analysis.is_none());
}

#[test]
fn test_prompt_follows_session_count_and_clamps() {
    let mut c = controller(false, 6);
    reach_ready_input(&mut c);

    let mut prompts = Vec::new();
    for _ in 0..5 {
        let Screen::Input(input) = c.screen() else {
            panic!("expected input screen");
        };
        prompts.push(input.typewriter.prompt());
        reach_results(&mut c);
        c.dispatch(Intent::ExploreAnother);
        c.advance_by(ms(10_000));
    }

    assert_eq!(
        prompts,
        vec![PROMPTS[0], PROMPTS[1], PROMPTS[2], PROMPTS[2], PROMPTS[2]]
    );
}

#[test]
fn test_new_prompt_restarts_typing_from_empty() {
    let mut c = controller(false, 7);
    reach_ready_input(&mut c);
    reach_results(&mut c);
    c.dispatch(Intent::ExploreAnother);

    let Screen::Input(input) = c.screen() else {
        panic!("expected input screen");
    };
    assert_eq!(input.typewriter.visible(), "");
    assert!(!input.typewriter.is_ready());
    assert_eq!(input.text(), "");

    c.advance_by(ms(50));
    let Screen::Input(input) = c.screen() else {
        panic!("expected input screen");
    };
    assert_eq!(input.typewriter.visible(), &PROMPTS[1][..1]);
}

// ============================================
// Cancellation
// ============================================

#[test]
fn test_logout_during_analysis_cancels_completion() {
    let mut c = controller(true, 8);
    reach_ready_input(&mut c);
    type_text(&mut c, "I feel kind of lost today");
    c.dispatch(Intent::SubmitInput);
    c.advance_by(ms(1200));
    assert_eq!(c.view(), View::Analyzing);

    c.dispatch(Intent::Logout);
    assert_eq!(c.view(), View::Auth);
    assert_eq!(c.pending_timers(), 0);

    c.advance_by(ms(60_000));
    assert_eq!(c.view(), View::Auth);
    assert!(c.session().analysis.is_none());
    assert!(c.session().user.is_none());
}

#[test]
fn test_leaving_input_mid_typing_cancels_typewriter() {
    let mut c = controller(false, 9);
    type_text(&mut c, "a");
    c.dispatch(Intent::Login);
    c.advance_by(ms(120));
    assert_eq!(c.pending_timers(), 1);

    c.dispatch(Intent::Logout);
    assert_eq!(c.pending_timers(), 0);
    assert_eq!(c.time_until_next_timer(), None);
}

#[test]
fn test_leaving_results_before_notice_cancels_it() {
    let mut c = controller(true, 10);
    reach_ready_input(&mut c);
    reach_results(&mut c);
    c.dispatch(Intent::Close);

    // Only the new prompt's typewriter remains
    assert_eq!(c.pending_timers(), 1);
    assert_eq!(c.time_until_next_timer(), Some(ms(50)));

    c.advance_by(ms(10_000));
    reach_results(&mut c);
    let Screen::Results(results) = c.screen() else {
        panic!("expected results screen");
    };
    assert!(!results.notice_visible);
}

#[test]
fn test_profile_side_branch() {
    let mut c = controller(false, 12);
    reach_ready_input(&mut c);
    reach_results(&mut c);
    c.dispatch(Intent::ExploreAnother);
    c.advance_by(ms(10_000));
    reach_results(&mut c);

    c.dispatch(Intent::OpenProfile);
    assert_eq!(c.view(), View::Profile);
    assert_invariant(&c);

    c.dispatch(Intent::ToggleProfileEdit);
    type_text(&mut c, "Sam");
    c.dispatch(Intent::ToggleProfileEdit);
    let Screen::Profile(form) = c.screen() else {
        panic!("expected profile screen");
    };
    assert_eq!(form.name, "Sam");
    assert!(!form.editing);

    c.dispatch(Intent::LeaveProfile);
    assert_eq!(c.view(), View::Input);
    assert_eq!(c.session().session_count, 1);
}

// ============================================
// Randomized walk
// ============================================

#[test]
fn test_random_intents_preserve_invariants() {
    let intents = [
        Intent::Edit(EditKey::Char('x')),
        Intent::Edit(EditKey::Char(' ')),
        Intent::Edit(EditKey::Backspace),
        Intent::Edit(EditKey::NextField),
        Intent::ToggleAuthMode,
        Intent::Login,
        Intent::ProceedFromDevNotice,
        Intent::SubmitInput,
        Intent::ExploreAnother,
        Intent::Close,
        Intent::DismissNotice,
        Intent::OpenProfile,
        Intent::ToggleProfileEdit,
        Intent::LeaveProfile,
        Intent::Logout,
    ];

    for seed in 0..20 {
        let mut c = controller(seed % 2 == 0, seed);
        let mut driver = StdRng::seed_from_u64(1000 + seed);

        for _ in 0..500 {
            if driver.gen_bool(0.3) {
                c.advance_by(ms(driver.gen_range(0..1500)));
            } else {
                let intent = intents[driver.gen_range(0..intents.len())];
                c.dispatch(intent);
            }
            assert_invariant(&c);
            if c.view() == View::Auth {
                assert_eq!(c.session().session_count, 0);
                assert!(c.session().user.is_none());
            }
        }
    }
}
