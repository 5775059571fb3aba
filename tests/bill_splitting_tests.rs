use billsplit::core::action::{Action, Effect, update};
use billsplit::core::config::{BillsplitConfig, CliOverrides, resolve};
use billsplit::core::forms::{DEFAULT_IMAGE_URL, Payer};
use billsplit::core::friend::{FriendId, demo_friends};
use billsplit::core::state::App;
use billsplit::tui::{Focus, TuiEvent, TuiState, handle_event};

// ============================================================================
// Helper Functions
// ============================================================================

fn seeded_app() -> App {
    App::new(demo_friends(), DEFAULT_IMAGE_URL)
}

fn balances(app: &App) -> Vec<(String, i64)> {
    app.friends
        .iter()
        .map(|f| (f.name.clone(), f.balance))
        .collect()
}

fn split(app: &mut App, id: &str, bill: &str, share: &str, payer: Payer) {
    update(app, Action::SelectFriend(FriendId::from(id)));
    update(app, Action::EditBillTotal(bill.to_string()));
    update(app, Action::EditUserShare(share.to_string()));
    update(app, Action::SetPayer(payer));
    update(app, Action::SubmitSplit);
}

// ============================================================================
// Core Scenarios
// ============================================================================

#[test]
fn test_seed_messages() {
    let app = seeded_app();
    let messages: Vec<String> = app.friends.iter().map(|f| f.balance_message()).collect();
    assert_eq!(
        messages,
        ["You owe Clark 7$", "Sarah owes you 20$", "You and Anthony are even"]
    );
}

#[test]
fn test_evening_of_splits() {
    let mut app = seeded_app();

    // Dinner with Clark: you pay 60, your part is 30 → Clark owes you 30, net +23
    split(&mut app, "118836", "60", "30", Payer::User);
    // Taxi with Sarah: she pays 20, your part is 10 → 20 - 10
    split(&mut app, "933372", "20", "10", Payer::Friend);
    // Anthony: over-large share is clamped, so he owes nothing
    split(&mut app, "499476", "15", "99", Payer::User);

    assert_eq!(
        balances(&app),
        vec![
            ("Clark".to_string(), 23),
            ("Sarah".to_string(), 10),
            ("Anthony".to_string(), 0),
        ]
    );
    assert!(app.selection.is_empty());
    assert!(app.split_form.is_none());
}

#[test]
fn test_new_friends_get_unique_ids() {
    let mut app = seeded_app();
    for name in ["Kim", "Kim", "Lee"] {
        update(&mut app, Action::ToggleAddFriend);
        update(&mut app, Action::EditFriendName(name.to_string()));
        update(&mut app, Action::SubmitAddFriend);
    }

    assert_eq!(app.friends.len(), 6);
    let mut ids: Vec<&FriendId> = app.friends.iter().map(|f| &f.id).collect();
    ids.sort_by(|a, b| a.as_str().cmp(b.as_str()));
    ids.dedup();
    assert_eq!(ids.len(), 6);
    assert!(app.friends.iter().skip(3).all(|f| f.balance == 0));
}

#[test]
fn test_split_with_new_friend() {
    let mut app = seeded_app();
    update(&mut app, Action::ToggleAddFriend);
    update(&mut app, Action::EditFriendName("Kim".to_string()));
    update(&mut app, Action::SubmitAddFriend);
    let kim = app.friends.get_index(3).map(|f| f.id.clone()).unwrap();

    split(&mut app, kim.as_str(), "100", "40", Payer::Friend);
    assert_eq!(app.friends.get(&kim).map(|f| f.balance), Some(-40));
}

#[test]
fn test_quit() {
    let mut app = seeded_app();
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

// ============================================================================
// Config → App
// ============================================================================

#[test]
fn test_app_from_configured_friends() {
    let config: BillsplitConfig = toml::from_str(
        r#"
[[friends]]
id = "z1"
name = "Zoe"
balance = 12
"#,
    )
    .unwrap();
    let app = App::from_config(&resolve(&config, &CliOverrides::default()));

    assert_eq!(app.friends.len(), 1);
    assert_eq!(app.friends.get_index(0).map(|f| f.balance_message()), Some("Zoe owes you 12$".to_string()));
}

// ============================================================================
// Keyboard Flow
// ============================================================================

fn press(app: &mut App, tui: &mut TuiState, events: Vec<TuiEvent>) {
    for event in events {
        handle_event(app, tui, event);
    }
}

#[test]
fn test_keyboard_session() {
    let mut app = seeded_app();
    let mut tui = TuiState::new();
    // Add Kim
    press(&mut app, &mut tui, vec![TuiEvent::InputChar('a')]);
    press(&mut app, &mut tui, "Kim".chars().map(TuiEvent::InputChar).collect());
    press(&mut app, &mut tui, vec![TuiEvent::Submit]);
    assert_eq!(tui.focus, Focus::FriendList);

    // Cursor is on Kim; split 50 with her, you pay, your share 20
    press(&mut app, &mut tui, vec![TuiEvent::Submit]);
    assert_eq!(tui.focus, Focus::SplitBill);
    press(&mut app, &mut tui, vec![TuiEvent::InputChar('5'), TuiEvent::InputChar('0'), TuiEvent::NextField]);
    press(&mut app, &mut tui, vec![TuiEvent::InputChar('2'), TuiEvent::InputChar('0'), TuiEvent::Submit]);

    assert_eq!(app.friends.get_index(3).map(|f| f.balance), Some(30));
    assert_eq!(app.status_message, "Split 50$ with Kim");
}
