//! Property-based tests for filtering, pagination and controller invariants.
//!
//! Tests validate:
//! 1. The empty pattern matches every line
//! 2. Highlight segments concatenate back to the line
//! 3. An occurring pattern yields a match segment equal to it
//! 4. Scrolling keeps the offset inside the matching range
//! 5. New searches and filter changes reset the offset

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use findview::config::KeyBindings;
use findview::model::{KeyAction, LineStore};
use findview::state::{
    highlight_segments, matches, paginate, AppState, FilterState, PromptEditor, PromptInput,
    PromptOutcome,
};
use proptest::prelude::*;

fn path_line() -> impl Strategy<Value = String> {
    "[a-z/._]{1,24}"
}

fn paths() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path_line(), 0..60)
}

/// Paginate and record until the offset is stable, as a redraw does.
fn redraw(state: &mut AppState, max_rows: usize) {
    loop {
        let stats = state.page(max_rows).stats();
        if !state.record_page(stats) {
            return;
        }
    }
}

// ===== Property 1-3: Filter =====

proptest! {
    #[test]
    fn empty_pattern_matches_everything(line in any::<String>()) {
        prop_assert!(matches(&line, ""));
    }

    #[test]
    fn segments_concatenate_to_line(line in "[abc/]{0,30}", pattern in "[abc]{0,4}") {
        let joined: String = highlight_segments(&line, &pattern).map(|s| s.text).collect();
        prop_assert_eq!(joined, line);
    }

    #[test]
    fn occurring_pattern_yields_match_segment(
        prefix in "[a-z]{0,10}",
        pattern in "[a-z]{1,5}",
        suffix in "[a-z]{0,10}",
    ) {
        let line = format!("{prefix}{pattern}{suffix}");
        let hit = highlight_segments(&line, &pattern).any(|s| s.is_match && s.text == pattern);
        prop_assert!(hit);
    }

    #[test]
    fn match_segments_always_equal_pattern(line in "[ab]{0,30}", pattern in "[ab]{1,3}") {
        for segment in highlight_segments(&line, &pattern).filter(|s| s.is_match) {
            prop_assert_eq!(segment.text, pattern.as_str());
        }
    }

    #[test]
    fn total_matching_counts_matching_lines(lines in paths(), pattern in "[a-z]{0,2}", rows in 0usize..20) {
        let store: LineStore = lines.iter().cloned().collect();
        let filter = FilterState::new(pattern.clone());
        let page = paginate(&store, &filter, 0, rows);

        let expected = lines.iter().filter(|l| l.contains(pattern.as_str())).count();
        prop_assert_eq!(page.total_matching, expected);
        prop_assert_eq!(page.shown, expected.min(rows));
        prop_assert!(page.rows.iter().all(|r| r.line.contains(pattern.as_str())));
    }
}

// ===== Property 4: Scroll bounds =====

proptest! {
    #[test]
    fn offset_stays_within_matching_range(
        lines in paths(),
        rows in 1usize..15,
        scrolls in prop::collection::vec(any::<bool>(), 0..80),
    ) {
        let mut state = AppState::default();
        state.apply_search_result(Ok(lines));
        redraw(&mut state, rows);

        for down in scrolls {
            let action = if down { KeyAction::ScrollDown } else { KeyAction::ScrollUp };
            state.apply_action(action);
            redraw(&mut state, rows);

            let stats = state.last_page();
            prop_assert!(
                state.offset() <= stats.total_matching.saturating_sub(stats.shown),
                "offset {} shown {} total {}",
                state.offset(),
                stats.shown,
                stats.total_matching
            );
        }
    }
}

// ===== Property 5: Resets =====

proptest! {
    #[test]
    fn new_search_resets_offset_and_filter(
        first in paths(),
        second in paths(),
        pattern in "[a-z]{1,2}",
        scrolls in 0usize..30,
    ) {
        let mut state = AppState::default();
        state.apply_search_result(Ok(first));
        redraw(&mut state, 5);
        for _ in 0..scrolls {
            state.apply_action(KeyAction::ScrollDown);
            redraw(&mut state, 5);
        }
        let bindings = KeyBindings::default();
        state.handle_key(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE), &bindings);
        for ch in pattern.chars() {
            state.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE), &bindings);
        }
        state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &bindings);

        state.apply_search_result(Ok(second));

        prop_assert_eq!(state.offset(), 0);
        prop_assert!(!state.filter().is_active());
    }

    #[test]
    fn filter_entry_and_clear_reset_offset(
        lines in paths(),
        pattern in "[a-z/]{0,3}",
        scrolls in 1usize..30,
        clear in any::<bool>(),
    ) {
        let bindings = KeyBindings::default();
        let mut state = AppState::default();
        state.apply_search_result(Ok(lines));
        redraw(&mut state, 4);
        for _ in 0..scrolls {
            state.apply_action(KeyAction::ScrollDown);
            redraw(&mut state, 4);
        }

        if clear {
            state.apply_action(KeyAction::ClearFilter);
        } else {
            state.apply_action(KeyAction::EnterFilter);
            for ch in pattern.chars() {
                state.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE), &bindings);
            }
            state.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &bindings);
        }

        prop_assert_eq!(state.offset(), 0);
    }
}

// ===== PromptEditor bounds =====

proptest! {
    #[test]
    fn prompt_never_exceeds_max_len(text in "\\PC{0,40}", max_len in 0usize..20) {
        let mut editor = PromptEditor::begin("find> ", max_len);
        for ch in text.chars() {
            editor.handle(PromptInput::Char(ch));
        }
        prop_assert!(editor.buffer().chars().count() <= max_len);

        let PromptOutcome::Committed(committed) = editor.handle(PromptInput::Commit) else {
            return Err(TestCaseError::fail("commit must return the buffer"));
        };
        prop_assert!(committed.chars().count() <= max_len);
        prop_assert_eq!(editor.buffer(), "");
    }
}
