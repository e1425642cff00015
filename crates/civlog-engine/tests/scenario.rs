use civlog_engine::{
    Action, Direction, Key, KeyInput, Outcome, PagePartitioner, Phase, action_for_key,
    page_totals, sum_totals,
};
use civlog_providers::load_export;
use civlog_testing::ExportBuilder;
use civlog_types::{FlightRecord, Hours, PageTotals};

fn scenario_records() -> Vec<FlightRecord> {
    let export = ExportBuilder::twelve_row_scenario();
    let loaded = load_export("voos.csv", &export.csv_bytes()).expect("Failed to load scenario");
    assert!(loaded.rejected.is_empty());
    loaded.records
}

fn render(totals: &PageTotals) -> String {
    format!(
        "day={} night={} total={} nav={} ifr={} cpt={} cmd={} dc={} cpl={} ldg={}",
        totals.day,
        totals.night,
        totals.total,
        totals.navigation,
        totals.instrument,
        totals.captain,
        totals.command,
        totals.dual,
        totals.copilot,
        totals.landings
    )
}

/// Close the first `size` unassigned rows as one page
fn close_prefix(partitioner: &mut PagePartitioner, size: usize) {
    assert_eq!(partitioner.toggle_select(size - 1), Outcome::Changed);
    assert_eq!(partitioner.commit_page(), Outcome::Changed);
    assert_eq!(partitioner.dismiss_review(), Outcome::Changed);
}

#[test]
fn test_two_pages_add_up_to_whole_export() {
    let records = scenario_records();
    assert_eq!(records.len(), 9);
    let whole = page_totals(&records);

    let mut partitioner = PagePartitioner::new(records, 10);
    close_prefix(&mut partitioner, 5);
    close_prefix(&mut partitioner, 4);

    assert!(partitioner.unassigned().is_empty());
    let pages = partitioner.pages();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].len(), 5);
    assert_eq!(pages[1].len(), 4);

    let per_page: Vec<PageTotals> = pages.iter().map(|p| page_totals(&p.records)).collect();
    assert_eq!(sum_totals(&per_page), whole);
    assert_eq!(partitioner.running_totals(), whole);
    assert_eq!(whole.total, whole.day + whole.night);

    let rendered: Vec<String> = per_page.iter().chain([&whole]).map(render).collect();
    insta::assert_snapshot!(rendered.join("\n"), @r"
    day=6.5 night=2.3 total=8.8 nav=1.1 ifr=0.7 cpt=0.0 cmd=2.6 dc=1.0 cpl=2.2 ldg=7
    day=6.6 night=0.5 total=7.1 nav=4.4 ifr=0.0 cpt=0.0 cmd=6.2 dc=0.9 cpl=0.0 ldg=5
    day=13.1 night=2.8 total=15.9 nav=5.5 ifr=0.7 cpt=0.0 cmd=8.8 dc=1.9 cpl=2.2 ldg=12
    ");
}

#[test]
fn test_unclassified_time_still_counts_toward_total() {
    let records = scenario_records();
    let whole = page_totals(&records);

    let buckets = whole.command + whole.dual + whole.copilot;
    // the "Aluno" flight (1.0 day + 2.0 night) has no bucket
    assert_eq!(whole.total, buckets + Hours::from_parts(3, 0));
}

fn press(partitioner: &mut PagePartitioner, input: KeyInput) -> Outcome {
    match action_for_key(partitioner.phase(), input) {
        Some(action) => partitioner.apply(action),
        None => Outcome::Ignored,
    }
}

#[test]
fn test_keyboard_session_closes_a_page() {
    let mut partitioner = PagePartitioner::new(scenario_records(), 10);

    for _ in 0..3 {
        press(&mut partitioner, KeyInput::plain(Key::Down));
    }
    assert_eq!(partitioner.highlight(), Some(2));

    assert_eq!(press(&mut partitioner, KeyInput::plain(Key::Enter)), Outcome::Changed);
    assert_eq!(partitioner.selection().collect::<Vec<_>>(), vec![0, 1, 2]);

    assert_eq!(
        press(&mut partitioner, KeyInput::plain(Key::Right)),
        Outcome::ScrollColumns(Direction::Forward)
    );

    assert_eq!(
        press(&mut partitioner, KeyInput::ctrl(Key::Char('f'))),
        Outcome::Changed
    );
    assert_eq!(partitioner.phase(), Phase::PageClosed);

    // everything but Enter/Escape is dead during review
    assert_eq!(press(&mut partitioner, KeyInput::plain(Key::Down)), Outcome::Ignored);
    assert_eq!(press(&mut partitioner, KeyInput::plain(Key::Esc)), Outcome::Changed);
    assert_eq!(partitioner.phase(), Phase::Browsing);

    let snapshot = partitioner.snapshot();
    assert_eq!(snapshot.pages.len(), 1);
    assert_eq!(snapshot.pages[0].records, 3);
    assert_eq!(snapshot.unassigned, 6);
    assert_eq!(snapshot.rows.len(), 6);
}

#[test]
fn test_start_here_then_continue() {
    let mut partitioner = PagePartitioner::new(scenario_records(), 4);

    close_prefix(&mut partitioner, 2);
    let reopened: Vec<_> = partitioner.pages()[0].records.iter().map(|r| r.id).collect();
    let fourth = partitioner.unassigned()[3].id;
    assert_eq!(partitioner.apply(Action::StartHere(fourth)), Outcome::Changed);

    assert_eq!(partitioner.pages().len(), 1);
    assert_eq!(partitioner.pages()[0].len(), 4);
    // the two rows of the replaced page come back first
    assert_eq!(partitioner.unassigned().len(), 5);
    let first_two: Vec<_> = partitioner.unassigned()[..2].iter().map(|r| r.id).collect();
    assert_eq!(first_two, reopened);

    close_prefix(&mut partitioner, 3);
    let numbers: Vec<u32> = partitioner.pages().iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2]);
}
