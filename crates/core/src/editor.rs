//! Hotspot editor state machine.
//!
//! Holds the editor-local [`Point`] list plus the interaction state of the
//! hotspot editing panel: which point is being edited (at most one), the
//! snapshot taken when editing started, which saved point has its product
//! popup open, and which point is being dragged.
//!
//! Every mutation builds a new point list and swaps it in. An operation that
//! fails validation returns an error and leaves the editor untouched.

use crate::hotspot::{
    clamp_percent, points_from_hotspots, hotspots_from_points, Hotspot, PickerResult, Point,
    DEFAULT_PRODUCT_LABEL,
};

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// On-screen rectangle of the image container, in client pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Convert a pointer position into clamped percentages of these bounds.
    ///
    /// Returns `None` for a collapsed container (zero or negative size).
    pub fn to_percent(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return None;
        }
        let x = (client_x - self.left) / self.width * 100.0;
        let y = (client_y - self.top) / self.height * 100.0;
        Some((clamp_percent(x), clamp_percent(y)))
    }

    /// Client-pixel anchor for a point placed at percentage coordinates.
    pub fn anchor_for(&self, point: &Point) -> PopupAnchor {
        PopupAnchor {
            top: self.top + self.height * point.y / 100.0,
            left: self.left + self.width * point.x / 100.0,
        }
    }
}

/// Where the product popup of a saved hotspot is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupAnchor {
    pub top: f64,
    pub left: f64,
}

/// Coordinate changed by a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// How a marker is rendered on the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    /// The point currently open in the editing panel.
    Editing,
    /// A confirmed hotspot; clicking it toggles the product popup.
    Saved,
    /// A newly placed hotspot that has not been confirmed yet.
    Unsaved,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("Hotspot index {index} is out of range ({len} hotspots)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Hotspot {editing} is already being edited")]
    EditInProgress { editing: usize },
}

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotspotEditor {
    points: Vec<Point>,
    editing: Option<usize>,
    snapshot: Option<Point>,
    viewing: Option<usize>,
    popup: Option<PopupAnchor>,
    dragging: Option<usize>,
}

impl HotspotEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a persisted gallery's hotspots; every point starts out saved.
    pub fn from_hotspots(hotspots: &[Hotspot]) -> Self {
        Self {
            points: points_from_hotspots(hotspots),
            ..Self::default()
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing
    }

    pub fn viewing_index(&self) -> Option<usize> {
        self.viewing
    }

    pub fn dragging_index(&self) -> Option<usize> {
        self.dragging
    }

    pub fn popup_anchor(&self) -> Option<PopupAnchor> {
        self.popup
    }

    /// Whether a point exists that has never been confirmed.
    pub fn has_unsaved(&self) -> bool {
        self.points.iter().any(|p| !p.saved)
    }

    /// Persisted shape of the current points.
    pub fn hotspots(&self) -> Vec<Hotspot> {
        hotspots_from_points(&self.points)
    }

    pub fn marker_state(&self, index: usize) -> Option<MarkerState> {
        let point = self.points.get(index)?;
        Some(if self.editing == Some(index) {
            MarkerState::Editing
        } else if point.saved {
            MarkerState::Saved
        } else {
            MarkerState::Unsaved
        })
    }

    // -- adding -------------------------------------------------------------

    /// "Add hotspot" action: insert an unsaved point at the default position.
    ///
    /// No-op (returns `None`) while an unsaved point exists. An edit in
    /// progress on a saved point is rolled back first. Returns the index of
    /// the new point, which is always `0`.
    pub fn add(&mut self) -> Option<usize> {
        if self.has_unsaved() {
            return None;
        }
        self.cancel();
        Some(self.insert_unsaved(Point::unsaved_default()))
    }

    /// Image click: insert an unsaved point under the pointer.
    ///
    /// Ignored while any point is being edited or an unsaved point exists, and
    /// for a collapsed container.
    pub fn add_at(&mut self, client_x: f64, client_y: f64, bounds: Bounds) -> Option<usize> {
        if self.editing.is_some() || self.has_unsaved() {
            return None;
        }
        let (x, y) = bounds.to_percent(client_x, client_y)?;
        Some(self.insert_unsaved(Point::unsaved_at(x, y)))
    }

    fn insert_unsaved(&mut self, point: Point) -> usize {
        let mut updated = Vec::with_capacity(self.points.len() + 1);
        updated.push(point);
        updated.extend(self.points.iter().cloned());
        self.replace(updated);
        self.editing = Some(0);
        self.snapshot = None;
        self.viewing = None;
        self.popup = None;
        self.dragging = None;
        0
    }

    // -- editing ------------------------------------------------------------

    /// Open a point in the editing panel, remembering its current values.
    ///
    /// Re-opening the point already being edited is a no-op; opening a
    /// different one while an edit is in progress is refused.
    pub fn edit(&mut self, index: usize) -> Result<(), EditorError> {
        self.check_index(index)?;
        match self.editing {
            Some(current) if current == index => return Ok(()),
            Some(current) => return Err(EditorError::EditInProgress { editing: current }),
            None => {}
        }
        self.snapshot = Some(self.points[index].clone());
        self.editing = Some(index);
        self.viewing = None;
        self.popup = None;
        Ok(())
    }

    /// Slider change for one axis. The value is clamped to `[0, 100]`.
    pub fn set_position(&mut self, index: usize, axis: Axis, value: f64) -> Result<(), EditorError> {
        self.check_index(index)?;
        let value = clamp_percent(value);
        let mut updated = self.points.clone();
        match axis {
            Axis::X => updated[index].x = value,
            Axis::Y => updated[index].y = value,
        }
        self.replace(updated);
        Ok(())
    }

    /// Attach the picked product to a point. Cancelling the picker leaves the
    /// point unchanged. Returns whether the point changed.
    pub fn apply_pick(&mut self, index: usize, result: PickerResult) -> Result<bool, EditorError> {
        self.check_index(index)?;
        let product = match result {
            PickerResult::Selected(product) => product,
            PickerResult::Cancelled => {
                tracing::debug!(index, "Product picker cancelled");
                return Ok(false);
            }
        };

        let mut updated = self.points.clone();
        let point = &mut updated[index];
        point.label = if product.title.is_empty() {
            DEFAULT_PRODUCT_LABEL.to_string()
        } else {
            product.title.clone()
        };
        point.img = product.primary_image().unwrap_or_default().to_string();
        point.id = product.id;
        self.replace(updated);
        Ok(true)
    }

    /// Confirm a point and close the editing panel.
    ///
    /// Refused while a different point is being edited.
    pub fn save(&mut self, index: usize) -> Result<(), EditorError> {
        self.check_index(index)?;
        if let Some(current) = self.editing.filter(|&current| current != index) {
            return Err(EditorError::EditInProgress { editing: current });
        }
        let mut updated = self.points.clone();
        updated[index].saved = true;
        self.replace(updated);
        self.exit_edit();
        Ok(())
    }

    /// Abandon the current edit.
    ///
    /// An edited existing point gets its snapshot back; a newly added point
    /// (no snapshot) is removed. Returns `false` when nothing was being edited.
    pub fn cancel(&mut self) -> bool {
        let Some(index) = self.editing else {
            return false;
        };
        let mut updated = self.points.clone();
        match self.snapshot.take() {
            Some(original) => updated[index] = original,
            None => {
                updated.remove(index);
                self.shift_view_after_removal(index);
            }
        }
        self.replace(updated);
        self.exit_edit();
        true
    }

    /// Remove a point outright, whatever its state, and leave edit and view
    /// mode.
    pub fn delete(&mut self, index: usize) -> Result<Point, EditorError> {
        self.check_index(index)?;
        let mut updated = self.points.clone();
        let removed = updated.remove(index);
        self.replace(updated);
        self.exit_edit();
        self.viewing = None;
        self.popup = None;
        Ok(removed)
    }

    // -- dragging -----------------------------------------------------------

    /// Pointer-down on a marker. Only the point being edited can be dragged.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if self.editing == Some(index) {
            self.dragging = Some(index);
            true
        } else {
            false
        }
    }

    /// Pointer-move over the container. Returns whether a point moved.
    pub fn drag_to(&mut self, client_x: f64, client_y: f64, bounds: Bounds) -> bool {
        let Some(index) = self.dragging else {
            return false;
        };
        let Some((x, y)) = bounds.to_percent(client_x, client_y) else {
            return false;
        };
        let mut updated = self.points.clone();
        updated[index].x = x;
        updated[index].y = y;
        self.replace(updated);
        true
    }

    /// Pointer-up anywhere over the container.
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    // -- viewing ------------------------------------------------------------

    /// Click on a marker: toggle the product popup of a saved point.
    ///
    /// Unsaved points never open a popup. Returns whether the popup is now
    /// open for `index`.
    pub fn toggle_view(&mut self, index: usize, bounds: Option<Bounds>) -> Result<bool, EditorError> {
        self.check_index(index)?;
        if !self.points[index].saved {
            return Ok(false);
        }
        if self.viewing == Some(index) {
            self.viewing = None;
            self.popup = None;
            return Ok(false);
        }
        self.popup = bounds.map(|b| b.anchor_for(&self.points[index]));
        self.viewing = Some(index);
        Ok(true)
    }

    // -- reset --------------------------------------------------------------

    /// Discard local edits and reload the given persisted hotspots.
    pub fn reset_to(&mut self, hotspots: &[Hotspot]) {
        *self = Self::from_hotspots(hotspots);
    }

    /// Discard every point.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    // -- internals ----------------------------------------------------------

    fn check_index(&self, index: usize) -> Result<(), EditorError> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(EditorError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }

    fn replace(&mut self, updated: Vec<Point>) {
        self.points = updated;
    }

    /// Keep the open popup on the same point after `removed` leaves the list.
    fn shift_view_after_removal(&mut self, removed: usize) {
        match self.viewing {
            Some(viewing) if viewing == removed => {
                self.viewing = None;
                self.popup = None;
            }
            Some(viewing) if viewing > removed => self.viewing = Some(viewing - 1),
            _ => {}
        }
    }

    fn exit_edit(&mut self) {
        self.editing = None;
        self.snapshot = None;
        self.dragging = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotspot::{ProductImage, ProductResource};
    use assert_matches::assert_matches;

    fn saved_hotspot(x: f64, y: f64, title: &str) -> Hotspot {
        Hotspot {
            x,
            y,
            product_id: format!("gid://shopify/Product/{title}"),
            title: title.to_string(),
            img: String::new(),
        }
    }

    fn editor_with_two() -> HotspotEditor {
        HotspotEditor::from_hotspots(&[saved_hotspot(10.0, 20.0, "a"), saved_hotspot(30.0, 40.0, "b")])
    }

    fn bounds() -> Bounds {
        Bounds::new(100.0, 50.0, 200.0, 400.0)
    }

    // -- add ----------------------------------------------------------------

    #[test]
    fn add_inserts_unsaved_point_at_head_in_edit_mode() {
        let mut editor = editor_with_two();
        assert_eq!(editor.add(), Some(0));
        assert_eq!(editor.len(), 3);
        let head = &editor.points()[0];
        assert!(!head.saved);
        assert_eq!((head.x, head.y), (50.0, 50.0));
        assert_eq!(editor.editing_index(), Some(0));
        assert_eq!(editor.marker_state(0), Some(MarkerState::Editing));
    }

    #[test]
    fn add_while_unsaved_exists_is_noop() {
        let mut editor = HotspotEditor::new();
        editor.add();
        editor.set_position(0, Axis::X, 12.0).unwrap();
        let before = editor.clone();

        assert_eq!(editor.add(), None);
        assert_eq!(editor, before);
    }

    #[test]
    fn add_rolls_back_edit_of_saved_point() {
        let mut editor = editor_with_two();
        editor.edit(1).unwrap();
        editor.set_position(1, Axis::Y, 99.0).unwrap();

        assert_eq!(editor.add(), Some(0));
        // Former index 1 is now index 2 and has its original values back.
        assert_eq!(editor.points()[2].y, 40.0);
    }

    #[test]
    fn add_at_click_uses_pointer_percentages() {
        let mut editor = HotspotEditor::new();
        assert_eq!(editor.add_at(150.0, 150.0, bounds()), Some(0));
        let p = &editor.points()[0];
        assert_eq!((p.x, p.y), (25.0, 25.0));
    }

    #[test]
    fn add_at_click_ignored_while_editing() {
        let mut editor = editor_with_two();
        editor.edit(0).unwrap();
        assert_eq!(editor.add_at(150.0, 150.0, bounds()), None);
        assert_eq!(editor.len(), 2);
    }

    #[test]
    fn add_at_click_clamps_outside_pointer() {
        let mut editor = HotspotEditor::new();
        editor.add_at(-500.0, 9000.0, bounds());
        let p = &editor.points()[0];
        assert_eq!((p.x, p.y), (0.0, 100.0));
    }

    #[test]
    fn add_at_click_ignores_collapsed_container() {
        let mut editor = HotspotEditor::new();
        assert_eq!(editor.add_at(1.0, 1.0, Bounds::new(0.0, 0.0, 0.0, 10.0)), None);
        assert!(editor.is_empty());
    }

    // -- edit / cancel ------------------------------------------------------

    #[test]
    fn cancel_new_point_removes_it() {
        let mut editor = editor_with_two();
        editor.add();
        assert!(editor.cancel());
        assert_eq!(editor.len(), 2);
        assert_eq!(editor.editing_index(), None);
        assert!(!editor.has_unsaved());
    }

    #[test]
    fn cancel_edit_restores_snapshot() {
        let mut editor = editor_with_two();
        editor.edit(1).unwrap();
        editor.set_position(1, Axis::X, 80.0).unwrap();
        editor
            .apply_pick(
                1,
                PickerResult::Selected(ProductResource {
                    id: "gid://shopify/Product/other".into(),
                    title: "Other".into(),
                    images: vec![],
                }),
            )
            .unwrap();

        assert!(editor.cancel());
        assert_eq!(editor.points()[1], Point::from(&saved_hotspot(30.0, 40.0, "b")));
        assert_eq!(editor.editing_index(), None);
    }

    #[test]
    fn cancel_without_edit_is_noop() {
        let mut editor = editor_with_two();
        let before = editor.clone();
        assert!(!editor.cancel());
        assert_eq!(editor, before);
    }

    #[test]
    fn edit_second_point_while_editing_is_refused() {
        let mut editor = editor_with_two();
        editor.edit(0).unwrap();
        assert_matches!(editor.edit(1), Err(EditorError::EditInProgress { editing: 0 }));
        assert!(editor.edit(0).is_ok());
    }

    #[test]
    fn edit_closes_popup() {
        let mut editor = editor_with_two();
        editor.toggle_view(0, Some(bounds())).unwrap();
        editor.edit(0).unwrap();
        assert_eq!(editor.viewing_index(), None);
        assert_eq!(editor.popup_anchor(), None);
    }

    #[test]
    fn edit_out_of_range() {
        let mut editor = editor_with_two();
        assert_matches!(
            editor.edit(5),
            Err(EditorError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    // -- position -----------------------------------------------------------

    #[test]
    fn set_position_clamps_to_bounds() {
        let mut editor = editor_with_two();
        editor.set_position(0, Axis::X, 140.0).unwrap();
        editor.set_position(0, Axis::Y, -12.0).unwrap();
        let p = &editor.points()[0];
        assert_eq!((p.x, p.y), (100.0, 0.0));
    }

    #[test]
    fn set_position_out_of_range_leaves_points_untouched() {
        let mut editor = editor_with_two();
        let before = editor.clone();
        assert!(editor.set_position(7, Axis::X, 1.0).is_err());
        assert_eq!(editor, before);
    }

    // -- drag ---------------------------------------------------------------

    #[test]
    fn drag_moves_only_the_edited_point() {
        let mut editor = editor_with_two();
        assert!(!editor.begin_drag(0), "not editing yet");

        editor.edit(0).unwrap();
        assert!(editor.begin_drag(0));
        assert!(editor.drag_to(200.0, 250.0, bounds()));
        let p = &editor.points()[0];
        assert_eq!((p.x, p.y), (50.0, 50.0));

        editor.end_drag();
        assert_eq!(editor.dragging_index(), None);
        assert!(!editor.drag_to(300.0, 450.0, bounds()));
        assert_eq!(editor.points()[0].x, 50.0);
    }

    #[test]
    fn drag_clamps_to_container() {
        let mut editor = editor_with_two();
        editor.edit(1).unwrap();
        editor.begin_drag(1);
        editor.drag_to(10_000.0, -10_000.0, bounds());
        let p = &editor.points()[1];
        assert_eq!((p.x, p.y), (100.0, 0.0));
    }

    #[test]
    fn begin_drag_on_other_point_is_ignored() {
        let mut editor = editor_with_two();
        editor.edit(0).unwrap();
        assert!(!editor.begin_drag(1));
        assert_eq!(editor.dragging_index(), None);
    }

    // -- pick ---------------------------------------------------------------

    #[test]
    fn pick_attaches_product() {
        let mut editor = HotspotEditor::new();
        editor.add();
        let changed = editor
            .apply_pick(
                0,
                PickerResult::Selected(ProductResource {
                    id: "gid://shopify/Product/9".into(),
                    title: "Sofa".into(),
                    images: vec![ProductImage {
                        id: "img".into(),
                        alt_text: None,
                        original_src: Some("https://cdn/sofa.png".into()),
                    }],
                }),
            )
            .unwrap();
        assert!(changed);
        let p = &editor.points()[0];
        assert_eq!(p.id, "gid://shopify/Product/9");
        assert_eq!(p.label, "Sofa");
        assert_eq!(p.img, "https://cdn/sofa.png");
    }

    #[test]
    fn pick_without_title_uses_default_label() {
        let mut editor = HotspotEditor::new();
        editor.add();
        editor
            .apply_pick(
                0,
                PickerResult::Selected(ProductResource {
                    id: "gid://shopify/Product/1".into(),
                    title: String::new(),
                    images: vec![],
                }),
            )
            .unwrap();
        assert_eq!(editor.points()[0].label, DEFAULT_PRODUCT_LABEL);
        assert_eq!(editor.points()[0].img, "");
    }

    #[test]
    fn pick_cancelled_leaves_point_unchanged() {
        let mut editor = editor_with_two();
        let before = editor.clone();
        assert_eq!(editor.apply_pick(0, PickerResult::Cancelled), Ok(false));
        assert_eq!(editor, before);
    }

    // -- save ---------------------------------------------------------------

    #[test]
    fn save_marks_point_saved_and_exits_edit() {
        let mut editor = HotspotEditor::new();
        editor.add();
        editor.begin_drag(0);
        editor.save(0).unwrap();
        assert!(editor.points()[0].saved);
        assert_eq!(editor.editing_index(), None);
        assert_eq!(editor.dragging_index(), None);
        assert_eq!(editor.marker_state(0), Some(MarkerState::Saved));

        // Once saved, a new point may be added again.
        assert_eq!(editor.add(), Some(0));
    }

    #[test]
    fn save_of_other_point_during_edit_is_refused() {
        let mut editor = HotspotEditor::from_hotspots(&[saved_hotspot(10.0, 10.0, "a")]);
        editor.add();
        assert_matches!(editor.save(1), Err(EditorError::EditInProgress { editing: 0 }));
        assert_eq!(editor.editing_index(), Some(0));
        assert!(!editor.points()[0].saved);

        // The new point can still be abandoned and another added afterwards.
        assert!(editor.cancel());
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.add(), Some(0));
    }

    #[test]
    fn saved_edit_is_not_rolled_back_by_later_cancel() {
        let mut editor = editor_with_two();
        editor.edit(0).unwrap();
        editor.set_position(0, Axis::X, 70.0).unwrap();
        editor.save(0).unwrap();
        assert!(!editor.cancel());
        assert_eq!(editor.points()[0].x, 70.0);
    }

    // -- delete -------------------------------------------------------------

    #[test]
    fn delete_removes_saved_point_and_exits_modes() {
        let mut editor = editor_with_two();
        editor.toggle_view(1, None).unwrap();
        let removed = editor.delete(1).unwrap();
        assert_eq!(removed.label, "b");
        assert_eq!(editor.len(), 1);
        assert_eq!(editor.viewing_index(), None);
        assert_eq!(editor.editing_index(), None);
    }

    #[test]
    fn delete_removes_unsaved_point_being_edited() {
        let mut editor = editor_with_two();
        editor.add();
        editor.delete(0).unwrap();
        assert_eq!(editor.len(), 2);
        assert!(!editor.has_unsaved());
        assert_eq!(editor.editing_index(), None);
        // Cancel after delete must not touch the list.
        assert!(!editor.cancel());
        assert_eq!(editor.len(), 2);
    }

    #[test]
    fn delete_out_of_range() {
        let mut editor = HotspotEditor::new();
        assert_matches!(editor.delete(0), Err(EditorError::IndexOutOfRange { .. }));
    }

    // -- view ---------------------------------------------------------------

    #[test]
    fn toggle_view_opens_and_closes_popup() {
        let mut editor = editor_with_two();
        assert_eq!(editor.toggle_view(0, Some(bounds())), Ok(true));
        assert_eq!(editor.viewing_index(), Some(0));
        // x=10%, y=20% of a 200x400 box at (100, 50).
        assert_eq!(
            editor.popup_anchor(),
            Some(PopupAnchor {
                top: 130.0,
                left: 120.0
            })
        );
        assert_eq!(editor.toggle_view(0, Some(bounds())), Ok(false));
        assert_eq!(editor.viewing_index(), None);
    }

    #[test]
    fn cancel_new_point_keeps_popup_on_same_point() {
        let mut editor = editor_with_two();
        editor.add();
        assert_eq!(editor.toggle_view(2, Some(bounds())), Ok(true));
        let viewed = editor.points()[2].clone();

        assert!(editor.cancel());
        assert_eq!(editor.len(), 2);
        let viewing = editor.viewing_index().unwrap();
        assert!(viewing < editor.len());
        assert_eq!(editor.points()[viewing], viewed);
        assert!(editor.popup_anchor().is_some());
    }

    #[test]
    fn toggle_view_ignores_unsaved_point() {
        let mut editor = HotspotEditor::new();
        editor.add();
        assert_eq!(editor.toggle_view(0, None), Ok(false));
        assert_eq!(editor.viewing_index(), None);
    }

    // -- reset --------------------------------------------------------------

    #[test]
    fn reset_to_discards_local_changes() {
        let original = vec![saved_hotspot(10.0, 20.0, "a")];
        let mut editor = HotspotEditor::from_hotspots(&original);
        editor.add();
        editor.delete(1).unwrap();
        editor.reset_to(&original);
        assert_eq!(editor.hotspots(), original);
        assert_eq!(editor.editing_index(), None);
    }

    #[test]
    fn hotspots_map_label_and_id() {
        let mut editor = HotspotEditor::new();
        editor.add();
        editor
            .apply_pick(
                0,
                PickerResult::Selected(ProductResource {
                    id: "gid://shopify/Product/3".into(),
                    title: "Rug".into(),
                    images: vec![],
                }),
            )
            .unwrap();
        editor.save(0).unwrap();
        let hotspots = editor.hotspots();
        assert_eq!(hotspots[0].title, "Rug");
        assert_eq!(hotspots[0].product_id, "gid://shopify/Product/3");
    }
}
