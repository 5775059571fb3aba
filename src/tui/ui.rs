use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::controls::button;
use crate::tui::components::{
    AddFriendPanel, FriendList, SplitBillPanel, TitleBar, add_friend_panel, split_bill_panel,
};
use crate::tui::{Focus, TuiState};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let [title_area, body_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [sidebar_area, main_area] =
        Layout::horizontal([Percentage(45), Min(0)]).areas(body_area);

    TitleBar::new(app.friends.len(), app.status_message.clone()).render(frame, title_area);

    draw_sidebar(frame, sidebar_area, app, tui);
    draw_main(frame, main_area, app, tui);

    frame.render_widget(
        Paragraph::new(help_text(tui.focus)).style(Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let form_height = if app.add_form.is_visible() {
        add_friend_panel::PANEL_HEIGHT
    } else {
        0
    };
    let [list_area, form_area, button_area] =
        Layout::vertical([Min(3), Length(form_height), Length(1)]).areas(area);

    FriendList::new(
        &app.friends,
        &app.selection,
        &mut tui.friend_list,
        tui.focus == Focus::FriendList,
    )
    .render(frame, list_area);

    if app.add_form.is_visible() {
        AddFriendPanel::new(&app.add_form, &mut tui.add_friend, tui.focus == Focus::AddFriend)
            .render(frame, form_area);
    }

    let label = if app.add_form.is_visible() { "Close" } else { "Add friend" };
    frame.render_widget(
        Line::from(button(label, app.add_form.is_visible())).alignment(Alignment::Right),
        button_area,
    );
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let (Some(form), Some(friend)) = (app.split_form.as_ref(), app.selected_friend()) else {
        let hint = Paragraph::new("Select a friend to split a bill.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        let [_, hint_area, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(hint, hint_area);
        return;
    };

    let [panel_area, _] = Layout::vertical([
        Constraint::Length(split_bill_panel::PANEL_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);

    SplitBillPanel::new(
        form,
        &friend.name,
        &mut tui.split_bill,
        tui.focus == Focus::SplitBill,
    )
    .render(frame, panel_area);
}

fn help_text(focus: Focus) -> &'static str {
    match focus {
        Focus::FriendList => " ↑↓ Move  Enter Select/Close  a Add friend  Tab Forms  q Quit",
        Focus::AddFriend => " Tab Next field  Enter Add  Esc Back",
        Focus::SplitBill => " Tab Next field  Space Payer  Enter Split  Esc Back",
    }
}
