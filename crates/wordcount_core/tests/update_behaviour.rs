use std::sync::Once;

use pretty_assertions::assert_eq;
use wordcount_core::{
    update, Effect, LabelContent, LoopState, Msg, SelectionPolicy, WordCountSnapshot,
};

const PAGE_A: &str = "https://www.notion.so/workspace/Page-A-0123";
const PAGE_B: &str = "https://www.notion.so/workspace/Page-B-4567";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(wordcount_logging::initialize_for_tests);
}

fn fresh() -> LoopState {
    LoopState::with_address(SelectionPolicy::PreferBlocks, PAGE_A)
}

fn measured(total: u64, selected_blocks: u64, selected_text: u64) -> Msg {
    Msg::Measured(WordCountSnapshot {
        total,
        selected_blocks,
        selected_text,
    })
}

#[test]
fn tick_requests_a_pass_and_counts_it() {
    init_logging();
    let (state, effects) = update(fresh(), Msg::Tick);

    assert_eq!(effects, vec![Effect::RunPass]);
    assert_eq!(state.view().passes, 1);

    let (state, _) = update(state, Msg::Tick);
    assert_eq!(state.view().passes, 2);
}

#[test]
fn same_address_is_not_a_navigation() {
    init_logging();
    let (state, effects) = update(fresh(), Msg::LocationObserved(PAGE_A.to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.view().navigations, 0);
}

#[test]
fn fragment_change_is_not_a_navigation() {
    init_logging();
    let (_, effects) = update(fresh(), Msg::LocationObserved(format!("{PAGE_A}#heading-1")));

    assert!(effects.is_empty());
}

#[test]
fn address_change_invalidates_root_then_tears_down() {
    init_logging();
    let (state, _) = update(fresh(), measured(10, 0, 0));
    let (state, effects) = update(state, Msg::LocationObserved(PAGE_B.to_string()));

    assert_eq!(effects, vec![Effect::InvalidateRoot, Effect::Teardown]);
    let view = state.view();
    assert_eq!(view.navigations, 1);
    assert_eq!(view.last_snapshot, None);
    assert_eq!(
        view.address.as_deref(),
        Some("https://www.notion.so/workspace/Page-B-4567")
    );
}

#[test]
fn first_observation_only_records_the_address() {
    init_logging();
    let state = LoopState::new(SelectionPolicy::PreferBlocks);
    let (state, effects) = update(state, Msg::LocationObserved(PAGE_A.to_string()));

    assert!(effects.is_empty());
    assert_eq!(state.view().navigations, 0);
    assert!(state.view().address.is_some());
}

#[test]
fn missing_structure_tears_down() {
    init_logging();
    let (state, _) = update(fresh(), measured(10, 0, 0));
    let (state, effects) = update(state, Msg::StructureMissing);

    assert_eq!(effects, vec![Effect::Teardown]);
    assert_eq!(state.view().last_snapshot, None);
}

#[test]
fn measurement_renders_total_without_selection() {
    init_logging();
    let (state, effects) = update(fresh(), measured(321, 0, 0));

    assert_eq!(effects, vec![Effect::Render(LabelContent::total(321))]);
    assert_eq!(
        state.view().last_snapshot,
        Some(WordCountSnapshot {
            total: 321,
            selected_blocks: 0,
            selected_text: 0,
        })
    );
}

#[test]
fn block_selection_takes_precedence_over_text_selection() {
    init_logging();
    let (_, effects) = update(fresh(), measured(321, 40, 7));

    assert_eq!(effects, vec![Effect::Render(LabelContent::selected(40))]);
}

#[test]
fn text_selection_precedence_is_configurable() {
    init_logging();
    let state = LoopState::with_address(SelectionPolicy::PreferText, PAGE_A);
    let (_, effects) = update(state, measured(321, 40, 7));

    assert_eq!(effects, vec![Effect::Render(LabelContent::selected(7))]);
}

#[test]
fn unload_tears_down_and_silences_later_messages() {
    init_logging();
    let (state, effects) = update(fresh(), Msg::Unloaded);

    assert_eq!(effects, vec![Effect::Teardown, Effect::Stop]);
    assert!(state.view().stopped);

    let (state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    assert_eq!(state.view().passes, 0);

    let (_, effects) = update(state, Msg::LocationObserved(PAGE_B.to_string()));
    assert!(effects.is_empty());
}
