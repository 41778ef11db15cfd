use crate::{Effect, LoopState, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: LoopState, msg: Msg) -> (LoopState, Vec<Effect>) {
    if state.is_stopped() {
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Tick => {
            state.begin_pass();
            vec![Effect::RunPass]
        }
        Msg::LocationObserved(address) => {
            if state.observe_address(&address) {
                // The old root may still be attached while the host swaps
                // content in, so it must not be trusted for the next pass.
                vec![Effect::InvalidateRoot, Effect::Teardown]
            } else {
                Vec::new()
            }
        }
        Msg::StructureMissing => {
            state.clear_snapshot();
            vec![Effect::Teardown]
        }
        Msg::Measured(snapshot) => {
            state.record_snapshot(snapshot);
            vec![Effect::Render(snapshot.label(state.policy()))]
        }
        Msg::Unloaded => {
            state.stop();
            vec![Effect::Teardown, Effect::Stop]
        }
    };

    (state, effects)
}
