use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_events::{EventListener, EventListenerOptions};
use gloo_render::{request_animation_frame, AnimationFrame};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};
use yew::prelude::{NodeRef, UseReducerDispatcher};

use super::position::{ContainerBounds, SliderAction, SliderState};
use crate::error;

/// Single-slot "latest value" cell plus the handle of the frame that will
/// apply it. Bursts of updates within one frame collapse into one write.
#[derive(Debug)]
pub struct FrameSlot<F> {
    pending: Option<f64>,
    handle: Option<F>,
}

impl<F> Default for FrameSlot<F> {
    fn default() -> Self {
        Self {
            pending: None,
            handle: None,
        }
    }
}

impl<F> FrameSlot<F> {
    /// Stores `value`, replacing any unapplied one. Returns `true` when no
    /// frame is scheduled yet and the caller has to [`arm`](Self::arm) one.
    pub fn queue(&mut self, value: f64) -> bool {
        self.pending = Some(value);
        self.handle.is_none()
    }

    pub fn arm(&mut self, handle: F) {
        self.handle = Some(handle);
    }

    pub fn take(&mut self) -> Option<f64> {
        self.handle = None;
        self.pending.take()
    }

    pub fn cancel(&mut self) -> Option<f64> {
        self.handle = None;
        self.pending.take()
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

/// Drag state owning the document listeners `C` and the pending frame `F`
/// of one drag. Ending the drag or dropping the tracker releases both.
#[derive(Debug)]
pub struct DragTracker<C, F> {
    dragging: bool,
    capture: Option<C>,
    frame: FrameSlot<F>,
}

impl<C, F> Default for DragTracker<C, F> {
    fn default() -> Self {
        Self {
            dragging: false,
            capture: None,
            frame: FrameSlot::default(),
        }
    }
}

impl<C, F> DragTracker<C, F> {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn has_capture(&self) -> bool {
        self.capture.is_some()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_armed()
    }

    pub fn begin(&mut self, pointer_x: f64, bounds: ContainerBounds, capture: C) -> Option<f64> {
        self.frame.cancel();
        self.capture = Some(capture);
        self.dragging = true;
        bounds.position_at(pointer_x)
    }

    /// Queues the position under the pointer. Returns `true` when a frame
    /// callback has to be scheduled and handed to [`arm_frame`](Self::arm_frame).
    pub fn move_to(&mut self, pointer_x: f64, bounds: ContainerBounds) -> bool {
        if !self.dragging {
            return false;
        }
        match bounds.position_at(pointer_x) {
            Some(position) => self.frame.queue(position),
            None => false,
        }
    }

    pub fn arm_frame(&mut self, handle: F) {
        if self.dragging {
            self.frame.arm(handle);
        }
    }

    pub fn take_frame(&mut self) -> Option<f64> {
        self.frame.take()
    }

    // Returns a queued position that was never painted
    pub fn end(&mut self) -> Option<f64> {
        self.dragging = false;
        self.capture = None;
        self.frame.cancel()
    }

    pub fn release(&mut self) {
        self.end();
    }
}

pub type DomDragTracker = DragTracker<Vec<EventListener>, AnimationFrame>;

#[derive(Clone)]
pub struct DragContext {
    pub tracker: Weak<RefCell<DomDragTracker>>,
    pub container: NodeRef,
    pub dispatcher: UseReducerDispatcher<SliderState>,
}

impl DragContext {
    pub fn new(
        tracker: &Rc<RefCell<DomDragTracker>>,
        container: NodeRef,
        dispatcher: UseReducerDispatcher<SliderState>,
    ) -> Self {
        Self {
            tracker: Rc::downgrade(tracker),
            container,
            dispatcher,
        }
    }

    fn bounds(&self) -> Option<ContainerBounds> {
        let rect = self.container.cast::<Element>()?.get_bounding_client_rect();
        Some(ContainerBounds::new(rect.left(), rect.width()))
    }
}

pub fn begin_drag(ctx: &DragContext, pointer_x: f64) {
    let Some(tracker) = ctx.tracker.upgrade() else {
        return;
    };
    if tracker.borrow().is_dragging() {
        return;
    }
    let Some(bounds) = ctx.bounds() else {
        return;
    };
    let capture = match capture_document(ctx) {
        Ok(capture) => capture,
        Err(err) => {
            warn!("Could not capture pointer for drag: {}", err);
            return;
        }
    };
    let position = tracker.borrow_mut().begin(pointer_x, bounds, capture);
    debug!("Drag started at {:?}", position);
    ctx.dispatcher.dispatch(SliderAction::Grab(position));
}

pub fn drag_to(ctx: &DragContext, pointer_x: f64) {
    let Some(tracker) = ctx.tracker.upgrade() else {
        return;
    };
    let Some(bounds) = ctx.bounds() else {
        return;
    };
    if !tracker.borrow_mut().move_to(pointer_x, bounds) {
        return;
    }
    let frame_ctx = ctx.clone();
    let handle = request_animation_frame(move |_| {
        let Some(tracker) = frame_ctx.tracker.upgrade() else {
            return;
        };
        let position = tracker.borrow_mut().take_frame();
        if let Some(position) = position {
            frame_ctx.dispatcher.dispatch(SliderAction::Reveal(position));
        }
    });
    tracker.borrow_mut().arm_frame(handle);
}

pub fn end_drag(ctx: &DragContext) {
    let Some(tracker) = ctx.tracker.upgrade() else {
        return;
    };
    if !tracker.borrow().is_dragging() {
        return;
    }
    let unpainted = tracker.borrow_mut().end();
    debug!("Drag ended");
    ctx.dispatcher.dispatch(SliderAction::Release(unpainted));
}

pub fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event
        .touches()
        .item(0)
        .or_else(|| event.changed_touches().item(0))
        .map(|touch| touch.client_x() as f64)
}

fn capture_document(ctx: &DragContext) -> error::Result<Vec<EventListener>> {
    let document = error::document()?;
    let mut listeners = Vec::with_capacity(5);

    let move_ctx = ctx.clone();
    listeners.push(EventListener::new(&document, "mousemove", move |event: &Event| {
        if let Some(event) = event.dyn_ref::<MouseEvent>() {
            drag_to(&move_ctx, event.client_x() as f64);
        }
    }));

    let up_ctx = ctx.clone();
    listeners.push(EventListener::new(&document, "mouseup", move |_event: &Event| {
        end_drag(&up_ctx);
    }));

    // Non-passive so the page does not scroll while the divider is dragged.
    let touch_ctx = ctx.clone();
    listeners.push(EventListener::new_with_options(
        &document,
        "touchmove",
        EventListenerOptions::enable_prevent_default(),
        move |event: &Event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            event.prevent_default();
            if let Some(x) = first_touch_x(event) {
                drag_to(&touch_ctx, x);
            }
        },
    ));

    for name in ["touchend", "touchcancel"] {
        let end_ctx = ctx.clone();
        listeners.push(EventListener::new(&document, name, move |_event: &Event| {
            end_drag(&end_ctx);
        }));
    }

    Ok(listeners)
}
