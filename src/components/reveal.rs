use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use js_sys::Array;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::components::entrance::{Entrance, EntranceState, Phase, VisualState};

// Roughly one frame at 60fps.
const FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub entrance: Entrance,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Copy, PartialEq)]
struct Frame {
    visual: VisualState,
    settled: bool,
}

impl Frame {
    fn of(state: &EntranceState) -> Self {
        Self {
            visual: state.visual(),
            settled: state.phase() == Phase::Visible,
        }
    }
}

fn now_seconds() -> Option<f64> {
    window()?.performance().map(|perf| perf.now() / 1000.0)
}

/// Holds the viewport observer for as long as the effect lives.
struct Watcher {
    observer: IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Watcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn watch(
    element: &Element,
    state: Rc<RefCell<EntranceState>>,
    frame: UseStateHandle<Frame>,
    ticker: Rc<RefCell<Option<Interval>>>,
) -> Result<Watcher, String> {
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if !visible {
                return;
            }
            observer.disconnect();

            let Some(now) = now_seconds() else {
                warn!("performance clock unavailable, showing content without animation");
                state.borrow_mut().settle();
                frame.set(Frame::of(&state.borrow()));
                return;
            };
            if !state.borrow_mut().enter(now) {
                return;
            }
            debug!("Entrance started at {:.3}s", now);

            let state = state.clone();
            let frame = frame.clone();
            let interval = Interval::new(FRAME_MS, move || {
                let now = now_seconds().unwrap_or(f64::INFINITY);
                let next = {
                    let mut state = state.borrow_mut();
                    state.tick(now);
                    Frame::of(&state)
                };
                frame.set(next);
            });
            *ticker.borrow_mut() = Some(interval);
        },
    );

    let observer = IntersectionObserver::new(on_intersect.as_ref().unchecked_ref())
        .map_err(|err| format!("{:?}", err))?;
    observer.observe(element);

    Ok(Watcher {
        observer,
        _on_intersect: on_intersect,
    })
}

/// Plays an entrance animation on its children the first time they scroll
/// into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_mut_ref(|| EntranceState::new(props.entrance));
    let frame = use_state(|| Frame::of(&state.borrow()));
    let ticker: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);

    {
        let node = node.clone();
        let state = state.clone();
        let frame = frame.clone();
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = match node.cast::<Element>() {
                    Some(element) => {
                        match watch(&element, state.clone(), frame.clone(), ticker.clone()) {
                            Ok(watcher) => Some(watcher),
                            Err(err) => {
                                warn!("IntersectionObserver unavailable ({}), showing content", err);
                                state.borrow_mut().settle();
                                frame.set(Frame::of(&state.borrow()));
                                None
                            }
                        }
                    }
                    None => None,
                };

                move || {
                    ticker.borrow_mut().take();
                    drop(watcher);
                }
            },
            (),
        );
    }

    {
        let state = state.clone();
        let frame = frame.clone();
        use_effect_with_deps(
            move |entrance: &Entrance| {
                // A new descriptor only matters until the entrance starts.
                let retargeted = state.borrow_mut().retarget(*entrance);
                if retargeted {
                    frame.set(Frame::of(&state.borrow()));
                }
                || ()
            },
            props.entrance,
        );
    }

    {
        let ticker = ticker.clone();
        use_effect_with_deps(
            move |settled: &bool| {
                if *settled {
                    debug!("Entrance settled");
                    // May run inside the interval's own callback, so drop it
                    // once that callback has returned.
                    if let Some(interval) = ticker.borrow_mut().take() {
                        yew::platform::spawn_local(async move { drop(interval) });
                    }
                }
                || ()
            },
            frame.settled,
        );
    }

    html! {
        <div ref={node} class={props.class.clone()} style={frame.visual.to_style()}>
            { for props.children.iter() }
        </div>
    }
}
