use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may keep presentation
/// state of their own (cursors, focus), and draw into a `Frame` within the
/// given `Rect`.
///
/// `render` takes `&mut self` so a component can adjust that presentation
/// state while drawing, e.g. scrolling a text field to keep the cursor in
/// view.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
