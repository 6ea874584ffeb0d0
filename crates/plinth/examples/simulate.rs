//! Scripted run of the panel against the in-memory fake shell. Prints the
//! bar's state after each batch of events; run with RUST_LOG=debug to see
//! the rebuild logging.

use plinth::PanelContext;
use shell_host::{fake::FakeShell, Rect, ScrollDirection, ShellEvent, WorkspaceId};

fn print_bar(ctx: &PanelContext<FakeShell>) {
    let items = ctx
        .panel()
        .window_list()
        .items()
        .iter()
        .map(|item| {
            if item.is_focused() {
                format!("*{}*", item.label())
            } else {
                item.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    println!("[{}] [{}]  @ {}", items, ctx.panel().tray_toggle().glyph(), ctx.panel().geometry());
}

fn main() {
    pretty_env_logger::init();

    let mut shell = FakeShell::new(2);
    let editor = shell.open_window(WorkspaceId(0), "Editor");
    let terminal = shell.open_window(WorkspaceId(0), "Terminal");
    shell.open_window(WorkspaceId(1), "Browser");

    let mut ctx = PanelContext::new(&mut shell);
    ctx.enable(&mut shell).expect("enable panel");
    print_bar(&ctx);

    shell.focus(Some(&editor));
    ctx.dispatch(&mut shell, ShellEvent::FocusChanged);
    print_bar(&ctx);

    // scroll down: focus steps from Editor to Terminal
    ctx.dispatch(&mut shell, ShellEvent::ListScrolled(ScrollDirection::Down));
    shell.focus(Some(&terminal));
    ctx.dispatch(&mut shell, ShellEvent::FocusChanged);
    print_bar(&ctx);

    editor.set_showing(false);
    ctx.dispatch(&mut shell, ShellEvent::WindowMinimized(editor.clone()));
    print_bar(&ctx);

    shell.add_summary_item();
    ctx.dispatch(&mut shell, ShellEvent::SummaryItemAdded);
    print_bar(&ctx);

    shell.set_display(Rect { x: 0, y: 0, width: 1280, height: 800 });
    ctx.dispatch(&mut shell, ShellEvent::MonitorsChanged);
    print_bar(&ctx);

    shell.switch_to(WorkspaceId(1));
    ctx.dispatch(&mut shell, ShellEvent::WorkspaceSwitched);
    print_bar(&ctx);

    println!("tray rests at y={} while shown", shell.tray_show_target(64).y);

    ctx.shutdown(&mut shell);
}
