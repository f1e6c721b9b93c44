//! Demo page: one trigger per placement plus a debounced counter.

use hovertip_core::debounce;
use hovertip_types::Placement;
use leptos::prelude::*;

use crate::components::HoverTip;
use crate::global::event_loop;

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="demo">
            <h1>"hovertip"</h1>
            <section class="demo__placements">
                {Placement::ALL
                    .into_iter()
                    .map(|placement| {
                        view! {
                            <HoverTip text=format!("Placed {}", placement) placement=placement>
                                <button class="demo__trigger">{placement.as_str()}</button>
                            </HoverTip>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="demo__slow">
                <HoverTip text="Waits 600ms before settling" delay=600>
                    <span class="demo__trigger">"slow"</span>
                </HoverTip>
            </section>
            <DebouncedCounter />
        </main>
    }
}

/// Counts keystrokes, and separately the pauses between bursts of typing.
#[component]
fn DebouncedCounter() -> impl IntoView {
    let keys = RwSignal::new(0_u32);
    let bursts = RwSignal::new(0_u32);
    let settle = debounce(move |()| bursts.update(|n| *n += 1), 400, false, event_loop());

    view! {
        <section class="demo__debounce">
            <input
                placeholder="type here"
                on:input=move |_| {
                    keys.update(|n| *n += 1);
                    settle.call(());
                }
            />
            <p>{move || format!("{} keys, {} bursts", keys.get(), bursts.get())}</p>
        </section>
    }
}
