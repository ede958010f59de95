//! Debounced mirror of a text signal.

use client::debounce::DebouncedInput;
use common::archive_const::INPUT_DEBOUNCE_MS;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Returns a signal that follows `source`, but only after `source` has been
/// stable for the debounce interval. Every call owns its own timer state, so
/// independently debounced fields never interfere.
pub fn use_debounced(source: ReadSignal<String>) -> ReadSignal<String> {
    let mut debounced = use_signal(move || source.peek().clone());
    let mut input = use_signal(DebouncedInput::<String>::new);

    use_effect(move || {
        let value = source.read().clone();
        let ticket = input.write().submit(value);
        spawn(async move {
            TimeoutFuture::new(INPUT_DEBOUNCE_MS).await;
            // settles only if no newer keystroke invalidated the ticket
            if let Some(value) = input.write().settle(ticket) {
                debounced.set(value);
            }
        });
    });

    // teardown: a timer that outlives the view must not write anything
    use_drop(move || input.write().cancel());

    debounced.into()
}
