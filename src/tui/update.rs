//! Pure state transitions: (UiState, Screen, Action) → Transition.
//!
//! Fully testable without a terminal or a session. Each screen defines
//! which actions it accepts. Unhandled actions return the UI state
//! unchanged (no-op).

use crate::session::Screen;

use super::state::{Action, Effect, MenuItem, Transition, UiState, UpdateContext};

/// Pure state transition function.
pub fn update(ui: UiState, screen: Screen, action: &Action, ctx: UpdateContext) -> Transition {
    if *action == Action::Quit {
        return Transition::Quit;
    }
    match screen {
        Screen::Menu => update_menu(ui, action),
        Screen::Editor => update_editor(ui, action, ctx.draft_len),
        Screen::Drill => update_drill(ui, action, ctx.finished),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Menu: pick "start" or "edit" by cursor or number.
fn update_menu(mut ui: UiState, action: &Action) -> Transition {
    let last = MenuItem::ALL.len() - 1;
    match action {
        Action::MoveUp => {
            ui.menu_cursor = ui.menu_cursor.saturating_sub(1);
            Transition::Ui(ui)
        }
        Action::MoveDown => {
            ui.menu_cursor = (ui.menu_cursor + 1).min(last);
            Transition::Ui(ui)
        }
        Action::Enter => match MenuItem::ALL.get(ui.menu_cursor) {
            Some(item) => open_menu_item(ui, *item),
            None => Transition::Ui(ui),
        },
        Action::NumberKey(n) => match MenuItem::ALL.get((*n as usize).wrapping_sub(1)) {
            Some(item) => open_menu_item(ui, *item),
            None => Transition::Ui(ui),
        },
        _ => Transition::Ui(ui),
    }
}

fn open_menu_item(mut ui: UiState, item: MenuItem) -> Transition {
    match item {
        MenuItem::StartDrill => Transition::Effect(ui, Effect::StartDrill),
        MenuItem::EditWords => {
            ui.input.clear();
            ui.list_cursor = 0;
            Transition::Effect(ui, Effect::OpenEditor)
        }
    }
}

/// Editor: typing, adding on Enter, list navigation, removal, save.
fn update_editor(mut ui: UiState, action: &Action, draft_len: usize) -> Transition {
    match action {
        Action::Input(c) => {
            ui.input.push(*c);
            Transition::Ui(ui)
        }
        Action::Backspace => {
            ui.input.pop();
            Transition::Ui(ui)
        }
        Action::Enter => {
            if ui.input.trim().is_empty() {
                return Transition::Ui(ui);
            }
            let text = std::mem::take(&mut ui.input);
            // Focus lands on the word about to be appended.
            ui.list_cursor = draft_len;
            Transition::Effect(ui, Effect::AddWord(text))
        }
        Action::MoveUp => {
            ui.list_cursor = ui.list_cursor.saturating_sub(1);
            Transition::Ui(ui)
        }
        Action::MoveDown => {
            ui.list_cursor = if draft_len == 0 {
                0
            } else {
                (ui.list_cursor + 1).min(draft_len - 1)
            };
            Transition::Ui(ui)
        }
        Action::Delete => {
            if ui.list_cursor >= draft_len {
                return Transition::Ui(ui);
            }
            let index = ui.list_cursor;
            if index + 1 == draft_len {
                ui.list_cursor = index.saturating_sub(1);
            }
            Transition::Effect(ui, Effect::RemoveWord(index))
        }
        Action::Save => Transition::Effect(leave_editor(ui), Effect::SaveAndReturn),
        Action::Back => Transition::Effect(leave_editor(ui), Effect::ReturnToMenu),
        _ => Transition::Ui(ui),
    }
}

fn leave_editor(mut ui: UiState) -> UiState {
    ui.input.clear();
    ui.list_cursor = 0;
    ui
}

/// Drill: next/previous, reveal, back to menu. Next on the finished
/// screen returns to the menu.
fn update_drill(ui: UiState, action: &Action, finished: bool) -> Transition {
    match action {
        Action::Next | Action::Enter if finished => Transition::Effect(ui, Effect::ReturnToMenu),
        Action::Next | Action::Enter => Transition::Effect(ui, Effect::Advance),
        Action::Prev => Transition::Effect(ui, Effect::Retreat),
        Action::Reveal => Transition::Effect(ui, Effect::Reveal),
        Action::Back => Transition::Effect(ui, Effect::ReturnToMenu),
        _ => Transition::Ui(ui),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(draft_len: usize) -> UpdateContext {
        UpdateContext {
            draft_len,
            finished: false,
        }
    }

    fn typed(text: &str) -> UiState {
        UiState {
            input: text.to_string(),
            ..Default::default()
        }
    }

    // -- Global --

    #[test]
    fn quit_from_every_screen() {
        for screen in [Screen::Menu, Screen::Editor, Screen::Drill] {
            assert_eq!(
                update(UiState::default(), screen, &Action::Quit, ctx(0)),
                Transition::Quit
            );
        }
    }

    // -- Menu --

    #[test]
    fn menu_cursor_clamps() {
        let down = update(UiState::default(), Screen::Menu, &Action::MoveDown, ctx(0));
        let Transition::Ui(ui) = down else { panic!("expected Ui") };
        assert_eq!(ui.menu_cursor, 1);

        let again = update(ui, Screen::Menu, &Action::MoveDown, ctx(0));
        let Transition::Ui(ui) = again else { panic!("expected Ui") };
        assert_eq!(ui.menu_cursor, 1);

        let up = update(UiState::default(), Screen::Menu, &Action::MoveUp, ctx(0));
        assert_eq!(up, Transition::Ui(UiState::default()));
    }

    #[test]
    fn menu_enter_follows_cursor() {
        let result = update(UiState::default(), Screen::Menu, &Action::Enter, ctx(0));
        assert_eq!(result, Transition::Effect(UiState::default(), Effect::StartDrill));

        let ui = UiState {
            menu_cursor: 1,
            ..Default::default()
        };
        let result = update(ui.clone(), Screen::Menu, &Action::Enter, ctx(0));
        assert_eq!(result, Transition::Effect(ui, Effect::OpenEditor));
    }

    #[test]
    fn menu_number_keys() {
        assert!(matches!(
            update(UiState::default(), Screen::Menu, &Action::NumberKey(1), ctx(0)),
            Transition::Effect(_, Effect::StartDrill)
        ));
        assert!(matches!(
            update(UiState::default(), Screen::Menu, &Action::NumberKey(2), ctx(0)),
            Transition::Effect(_, Effect::OpenEditor)
        ));
        assert_eq!(
            update(UiState::default(), Screen::Menu, &Action::NumberKey(0), ctx(0)),
            Transition::Ui(UiState::default())
        );
        assert_eq!(
            update(UiState::default(), Screen::Menu, &Action::NumberKey(7), ctx(0)),
            Transition::Ui(UiState::default())
        );
    }

    #[test]
    fn opening_editor_clears_leftover_input() {
        let ui = UiState {
            input: "old".into(),
            list_cursor: 4,
            menu_cursor: 1,
        };
        let Transition::Effect(ui, Effect::OpenEditor) =
            update(ui, Screen::Menu, &Action::Enter, ctx(0))
        else {
            panic!("expected OpenEditor");
        };
        assert!(ui.input.is_empty());
        assert_eq!(ui.list_cursor, 0);
    }

    // -- Editor --

    #[test]
    fn editor_typing_and_backspace() {
        let t = update(typed("글"), Screen::Editor, &Action::Input('자'), ctx(0));
        assert_eq!(t, Transition::Ui(typed("글자")));

        let t = update(typed("글자"), Screen::Editor, &Action::Backspace, ctx(0));
        assert_eq!(t, Transition::Ui(typed("글")));

        let t = update(typed(""), Screen::Editor, &Action::Backspace, ctx(0));
        assert_eq!(t, Transition::Ui(typed("")));
    }

    #[test]
    fn editor_enter_adds_and_clears_input() {
        let t = update(typed(" 겹침 "), Screen::Editor, &Action::Enter, ctx(3));
        match t {
            Transition::Effect(ui, Effect::AddWord(text)) => {
                assert_eq!(text, " 겹침 ");
                assert!(ui.input.is_empty());
                assert_eq!(ui.list_cursor, 3);
            }
            other => panic!("expected AddWord, got {:?}", other),
        }
    }

    #[test]
    fn editor_enter_on_blank_input_is_noop() {
        let t = update(typed("   "), Screen::Editor, &Action::Enter, ctx(2));
        assert_eq!(t, Transition::Ui(typed("   ")));
    }

    #[test]
    fn editor_cursor_clamps_to_draft() {
        let ui = UiState {
            list_cursor: 1,
            ..Default::default()
        };
        let Transition::Ui(ui) = update(ui, Screen::Editor, &Action::MoveDown, ctx(2)) else {
            panic!("expected Ui")
        };
        assert_eq!(ui.list_cursor, 1);

        let Transition::Ui(ui) = update(ui, Screen::Editor, &Action::MoveDown, ctx(0)) else {
            panic!("expected Ui")
        };
        assert_eq!(ui.list_cursor, 0);
    }

    #[test]
    fn editor_delete_removes_focused_word() {
        let ui = UiState {
            list_cursor: 1,
            ..Default::default()
        };
        let t = update(ui.clone(), Screen::Editor, &Action::Delete, ctx(3));
        assert_eq!(t, Transition::Effect(ui, Effect::RemoveWord(1)));
    }

    #[test]
    fn editor_delete_last_row_moves_cursor_up() {
        let ui = UiState {
            list_cursor: 2,
            ..Default::default()
        };
        match update(ui, Screen::Editor, &Action::Delete, ctx(3)) {
            Transition::Effect(ui, Effect::RemoveWord(2)) => assert_eq!(ui.list_cursor, 1),
            other => panic!("expected RemoveWord, got {:?}", other),
        }
    }

    #[test]
    fn editor_delete_on_empty_draft_is_noop() {
        let t = update(UiState::default(), Screen::Editor, &Action::Delete, ctx(0));
        assert_eq!(t, Transition::Ui(UiState::default()));
    }

    #[test]
    fn editor_save_and_back_reset_input() {
        let t = update(typed("반쯤"), Screen::Editor, &Action::Save, ctx(1));
        assert_eq!(t, Transition::Effect(UiState::default(), Effect::SaveAndReturn));

        let t = update(typed("반쯤"), Screen::Editor, &Action::Back, ctx(1));
        assert_eq!(t, Transition::Effect(UiState::default(), Effect::ReturnToMenu));
    }

    // -- Drill --

    #[test]
    fn drill_navigation_maps_to_effects() {
        let ui = UiState::default;
        assert_eq!(
            update(ui(), Screen::Drill, &Action::Next, ctx(0)),
            Transition::Effect(ui(), Effect::Advance)
        );
        assert_eq!(
            update(ui(), Screen::Drill, &Action::Prev, ctx(0)),
            Transition::Effect(ui(), Effect::Retreat)
        );
        assert_eq!(
            update(ui(), Screen::Drill, &Action::Reveal, ctx(0)),
            Transition::Effect(ui(), Effect::Reveal)
        );
        assert_eq!(
            update(ui(), Screen::Drill, &Action::Back, ctx(0)),
            Transition::Effect(ui(), Effect::ReturnToMenu)
        );
    }

    #[test]
    fn drill_next_when_finished_returns_to_menu() {
        let finished = UpdateContext {
            draft_len: 0,
            finished: true,
        };
        assert_eq!(
            update(UiState::default(), Screen::Drill, &Action::Next, finished),
            Transition::Effect(UiState::default(), Effect::ReturnToMenu)
        );
    }

    #[test]
    fn drill_ignores_editor_actions() {
        let t = update(UiState::default(), Screen::Drill, &Action::Input('x'), ctx(0));
        assert_eq!(t, Transition::Ui(UiState::default()));
    }
}
