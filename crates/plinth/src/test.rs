use pretty_assertions::assert_eq;
use shell_host::{
    fake::{FakeShell, FakeWindow},
    Rect, ScrollDirection, ShellEvent, WindowHandle, WorkspaceId,
};

use crate::context::PanelContext;

type Event = ShellEvent<FakeWindow>;

fn added(workspace: usize, window: &FakeWindow) -> Event {
    ShellEvent::WindowAdded { workspace: WorkspaceId(workspace), window: window.clone() }
}

fn removed(workspace: usize, window: &FakeWindow) -> Event {
    ShellEvent::WindowRemoved { workspace: WorkspaceId(workspace), window: window.clone() }
}

fn labels(ctx: &PanelContext<FakeShell>) -> Vec<String> {
    ctx.panel().window_list().items().iter().map(|item| item.label().to_string()).collect()
}

fn focused_labels(ctx: &PanelContext<FakeShell>) -> Vec<String> {
    ctx.panel()
        .window_list()
        .items()
        .iter()
        .filter(|item| item.is_focused())
        .map(|item| item.label().to_string())
        .collect()
}

fn assert_no_double_disconnects(shell: &FakeShell) {
    let log = shell.disconnect_log();
    for handle in log {
        assert_eq!(log.iter().filter(|h| *h == handle).count(), 1, "signal {} disconnected more than once", handle);
    }
}

#[test]
fn tracks_only_interesting_windows_with_apps() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);

    let editor = shell.open_window(WorkspaceId(0), "Editor");
    let dock = shell.open_chrome(WorkspaceId(0), "Dock");
    let orphan = shell.open_appless(WorkspaceId(0), "Orphan");
    ctx.dispatch(&mut shell, added(0, &editor));
    ctx.dispatch(&mut shell, added(0, &dock));
    ctx.dispatch(&mut shell, added(0, &orphan));

    assert_eq!(labels(&ctx), vec!["Editor"]);

    // a second add for the same window must not create a duplicate item
    ctx.dispatch(&mut shell, added(0, &editor));
    assert_eq!(labels(&ctx), vec!["Editor"]);
}

#[test]
fn ignores_events_for_inactive_workspaces() {
    let mut shell = FakeShell::new(2);
    let mut ctx = PanelContext::new(&mut shell);

    let elsewhere = shell.open_window(WorkspaceId(1), "Elsewhere");
    ctx.dispatch(&mut shell, added(1, &elsewhere));
    assert!(ctx.panel().window_list().is_empty());

    // removal of a window that never got tracked is a no-op
    ctx.dispatch(&mut shell, removed(1, &elsewhere));
    ctx.dispatch(&mut shell, removed(0, &elsewhere));
    assert!(ctx.panel().window_list().is_empty());
}

#[test]
fn removal_detaches_in_place_and_unsubscribes_once() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);

    let a = shell.open_window(WorkspaceId(0), "A");
    let b = shell.open_window(WorkspaceId(0), "B");
    let c = shell.open_window(WorkspaceId(0), "C");
    for w in [&a, &b, &c] {
        ctx.dispatch(&mut shell, added(0, w));
    }
    assert_eq!(shell.title_watch_count(), 3);

    shell.close_window(&b);
    ctx.dispatch(&mut shell, removed(0, &b));
    assert_eq!(labels(&ctx), vec!["A", "C"]);
    assert_eq!(shell.title_watch_count(), 2);
    assert_no_double_disconnects(&shell);

    // removing it again is a no-op
    ctx.dispatch(&mut shell, removed(0, &b));
    assert_eq!(labels(&ctx), vec!["A", "C"]);
    assert_no_double_disconnects(&shell);
}

#[test]
fn initial_build_picks_up_existing_windows_in_creation_order() {
    let mut shell = FakeShell::new(1);
    shell.open_window(WorkspaceId(0), "First");
    shell.open_window(WorkspaceId(0), "Second");
    shell.open_window(WorkspaceId(0), "Third");

    let ctx = PanelContext::new(&mut shell);
    assert_eq!(labels(&ctx), vec!["First", "Second", "Third"]);
}

#[test]
fn rebuild_restores_stable_sequence_order() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);

    let a = shell.open_window(WorkspaceId(0), "A");
    let b = shell.open_window(WorkspaceId(0), "B");
    let c = shell.open_window(WorkspaceId(0), "C");

    // events arrive in arbitrary order; incremental adds just append
    ctx.dispatch(&mut shell, added(0, &c));
    ctx.dispatch(&mut shell, added(0, &a));
    ctx.dispatch(&mut shell, added(0, &b));
    assert_eq!(labels(&ctx), vec!["C", "A", "B"]);

    // a full rebuild sorts by creation order
    ctx.dispatch(&mut shell, ShellEvent::WorkspaceSwitched);
    assert_eq!(labels(&ctx), vec!["A", "B", "C"]);
}

#[test]
fn focus_event_marks_exactly_one_item() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);

    let a = shell.open_window(WorkspaceId(0), "A");
    let b = shell.open_window(WorkspaceId(0), "B");
    ctx.dispatch(&mut shell, added(0, &a));
    ctx.dispatch(&mut shell, added(0, &b));

    shell.focus(Some(&b));
    ctx.dispatch(&mut shell, ShellEvent::FocusChanged);
    assert_eq!(focused_labels(&ctx), vec!["B"]);

    shell.focus(Some(&a));
    ctx.dispatch(&mut shell, ShellEvent::FocusChanged);
    assert_eq!(focused_labels(&ctx), vec!["A"]);

    shell.focus(None);
    ctx.dispatch(&mut shell, ShellEvent::FocusChanged);
    assert_eq!(focused_labels(&ctx), Vec::<String>::new());
}

#[test]
fn minimize_and_map_toggle_bracketed_label() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);

    let editor = shell.open_window(WorkspaceId(0), "Editor");
    ctx.dispatch(&mut shell, added(0, &editor));
    assert_eq!(labels(&ctx), vec!["Editor"]);

    editor.set_showing(false);
    ctx.dispatch(&mut shell, ShellEvent::WindowMinimized(editor.clone()));
    assert_eq!(labels(&ctx), vec!["[Editor]"]);

    editor.set_showing(true);
    ctx.dispatch(&mut shell, ShellEvent::WindowMapped(editor.clone()));
    assert_eq!(labels(&ctx), vec!["Editor"]);
}

#[test]
fn title_change_recomputes_label_with_hidden_rule() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);

    let editor = shell.open_window(WorkspaceId(0), "Editor");
    ctx.dispatch(&mut shell, added(0, &editor));

    editor.set_title("Vim");
    ctx.dispatch(&mut shell, ShellEvent::TitleChanged(editor.clone()));
    assert_eq!(labels(&ctx), vec!["Vim"]);

    editor.set_showing(false);
    editor.set_title("Emacs");
    ctx.dispatch(&mut shell, ShellEvent::TitleChanged(editor.clone()));
    assert_eq!(labels(&ctx), vec!["[Emacs]"]);

    // title events for untracked windows are ignored
    let stranger = shell.open_chrome(WorkspaceId(0), "Dock");
    ctx.dispatch(&mut shell, ShellEvent::TitleChanged(stranger));
    assert_eq!(labels(&ctx), vec!["[Emacs]"]);
}

#[test]
fn press_minimizes_focused_and_activates_unfocused() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);

    let a = shell.open_window(WorkspaceId(0), "A");
    let b = shell.open_window(WorkspaceId(0), "B");
    ctx.dispatch(&mut shell, added(0, &a));
    ctx.dispatch(&mut shell, added(0, &b));

    shell.focus(Some(&a));
    ctx.dispatch(&mut shell, ShellEvent::ItemPressed(a.clone()));
    assert_eq!(a.minimizations().len(), 1);
    assert_eq!(a.activations().len(), 0);

    ctx.dispatch(&mut shell, ShellEvent::ItemPressed(b.clone()));
    assert_eq!(b.activations().len(), 1);
    assert_eq!(b.minimizations().len(), 0);

    // timestamps are taken at event time and increase monotonically
    assert!(b.activations()[0] > a.minimizations()[0]);
}

#[test]
fn scroll_steps_focus_and_clamps_at_the_ends() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);

    let a = shell.open_window(WorkspaceId(0), "A");
    let b = shell.open_window(WorkspaceId(0), "B");
    let c = shell.open_window(WorkspaceId(0), "C");
    for w in [&a, &b, &c] {
        ctx.dispatch(&mut shell, added(0, w));
    }

    // no focused item: the gesture is ignored
    ctx.dispatch(&mut shell, ShellEvent::ListScrolled(ScrollDirection::Down));
    assert_eq!(a.activations().len() + b.activations().len() + c.activations().len(), 0);

    shell.focus(Some(&a));
    ctx.dispatch(&mut shell, ShellEvent::ListScrolled(ScrollDirection::Down));
    assert_eq!(b.activations().len(), 1);

    // scrolling up past the first item clamps and activates nothing
    ctx.dispatch(&mut shell, ShellEvent::ListScrolled(ScrollDirection::Up));
    assert_eq!(a.activations().len(), 0);

    shell.focus(Some(&c));
    ctx.dispatch(&mut shell, ShellEvent::ListScrolled(ScrollDirection::Down));
    assert_eq!(c.activations().len(), 0);
    assert_eq!(b.activations().len(), 1);
}

#[test]
fn workspace_switch_rebuilds_from_new_workspace() {
    let mut shell = FakeShell::new(2);
    let mut ctx = PanelContext::new(&mut shell);

    let a = shell.open_window(WorkspaceId(0), "A");
    let b = shell.open_window(WorkspaceId(0), "B");
    shell.open_window(WorkspaceId(1), "Other");
    ctx.dispatch(&mut shell, added(0, &a));
    ctx.dispatch(&mut shell, added(0, &b));
    assert_eq!(shell.title_watch_count(), 2);

    shell.switch_to(WorkspaceId(1));
    ctx.dispatch(&mut shell, ShellEvent::WorkspaceSwitched);

    assert_eq!(labels(&ctx), vec!["Other"]);
    assert_eq!(shell.title_watch_count(), 1);
    assert_no_double_disconnects(&shell);
}

#[test]
fn workspace_count_change_resubscribes_and_rebuilds() {
    let mut shell = FakeShell::new(3);
    let mut ctx = PanelContext::new(&mut shell);
    assert_eq!(shell.workspace_watch_count(), 6);

    shell.switch_to(WorkspaceId(2));
    let late = shell.open_window(WorkspaceId(2), "Late");
    ctx.dispatch(&mut shell, ShellEvent::WorkspaceSwitched);
    ctx.dispatch(&mut shell, added(2, &late));
    assert_eq!(labels(&ctx), vec!["Late"]);

    // the active workspace goes away; its windows do too
    shell.set_workspace_count(2);
    let home = shell.open_window(WorkspaceId(1), "Home");
    ctx.dispatch(&mut shell, ShellEvent::WorkspaceCountChanged);

    assert_eq!(shell.workspace_watch_count(), 4);
    assert_eq!(labels(&ctx), vec!["Home"]);
    assert_eq!(home.id(), ctx.panel().window_list().items()[0].window().id());
    assert_no_double_disconnects(&shell);
}

#[test]
fn tray_glyph_tracks_summary_occupancy() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);
    assert_eq!(ctx.panel().tray_toggle().glyph(), " ");

    shell.add_summary_item();
    ctx.dispatch(&mut shell, ShellEvent::SummaryItemAdded);
    assert_eq!(ctx.panel().tray_toggle().glyph(), "!");

    shell.add_summary_item();
    ctx.dispatch(&mut shell, ShellEvent::SummaryItemAdded);
    assert_eq!(ctx.panel().tray_toggle().glyph(), "!");

    shell.remove_summary_item();
    ctx.dispatch(&mut shell, ShellEvent::SummaryItemRemoved);
    assert_eq!(ctx.panel().tray_toggle().glyph(), "!");

    shell.remove_summary_item();
    ctx.dispatch(&mut shell, ShellEvent::SummaryItemRemoved);
    assert_eq!(ctx.panel().tray_toggle().glyph(), " ");
}

#[test]
fn tray_toggle_press_flips_tray_state() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);
    assert!(!shell.tray_shown());

    ctx.dispatch(&mut shell, ShellEvent::TrayTogglePressed);
    assert!(shell.tray_shown());

    ctx.dispatch(&mut shell, ShellEvent::TrayTogglePressed);
    assert!(!shell.tray_shown());
}

#[test]
fn panel_hugs_the_bottom_edge_of_the_primary_display() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);
    ctx.enable(&mut shell).unwrap();

    assert!(shell.panel_attached());
    let expected = Rect { x: 0, y: 1080 - 24, width: 1920, height: 24 };
    assert_eq!(ctx.panel().geometry(), expected);
    assert_eq!(shell.panel_geometry(), Some(expected));

    shell.set_display(Rect { x: 0, y: 0, width: 1280, height: 800 });
    ctx.dispatch(&mut shell, ShellEvent::MonitorsChanged);
    assert_eq!(ctx.panel().geometry(), Rect { x: 0, y: 800 - 24, width: 1280, height: 24 });

    shell.set_panel_height(32);
    ctx.dispatch(&mut shell, ShellEvent::ThemeChanged);
    assert_eq!(ctx.panel().geometry(), Rect { x: 0, y: 800 - 32, width: 1280, height: 32 });
}

#[test]
fn tray_animation_override_clears_the_live_panel_height() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);

    // before enabling, the shell's own edge slide is in effect
    assert!(!shell.has_custom_tray_animation());
    assert_eq!(shell.tray_show_target(40).y, -40);

    ctx.enable(&mut shell).unwrap();
    assert!(shell.has_custom_tray_animation());
    assert_eq!(shell.tray_show_target(40).y, -(40 + 24));
    assert_eq!(shell.tray_hide_target(40).y, 40);

    // the strategy reads the panel height live, so a theme change shows up
    // without reinstalling anything
    shell.set_panel_height(32);
    ctx.dispatch(&mut shell, ShellEvent::ThemeChanged);
    assert_eq!(shell.tray_show_target(40).y, -(40 + 32));

    ctx.disable(&mut shell);
    assert!(!shell.has_custom_tray_animation());
    assert_eq!(shell.tray_show_target(40).y, -40);
    assert!(!shell.panel_attached());
}

#[test]
fn enable_twice_fails_and_disable_is_idempotent() {
    let mut shell = FakeShell::new(1);
    let mut ctx = PanelContext::new(&mut shell);

    ctx.enable(&mut shell).unwrap();
    assert!(ctx.enable(&mut shell).is_err());
    assert!(ctx.is_enabled());

    ctx.disable(&mut shell);
    ctx.disable(&mut shell);
    assert!(!ctx.is_enabled());

    // re-enabling after a clean disable works
    ctx.enable(&mut shell).unwrap();
    assert!(shell.has_custom_tray_animation());
}

#[test]
fn shutdown_drops_every_subscription_exactly_once() {
    let mut shell = FakeShell::new(2);
    let mut ctx = PanelContext::new(&mut shell);

    let a = shell.open_window(WorkspaceId(0), "A");
    let b = shell.open_window(WorkspaceId(0), "B");
    ctx.dispatch(&mut shell, added(0, &a));
    ctx.dispatch(&mut shell, added(0, &b));
    ctx.enable(&mut shell).unwrap();

    // 2 workspaces * 2 signals + 2 summary signals + 2 title watches
    assert_eq!(shell.live_connections(), 8);

    ctx.shutdown(&mut shell);
    assert_eq!(shell.live_connections(), 0);
    assert!(!shell.has_custom_tray_animation());
    assert_no_double_disconnects(&shell);
}
