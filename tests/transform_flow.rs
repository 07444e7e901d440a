// SPDX-License-Identifier: MPL-2.0
//! End-to-end reducer scenarios for the transform view.

use cloud_lens::transform::{reduce, Action, HexColor, ImageDescriptor, Layout, State, Transformation};

fn run(actions: impl IntoIterator<Item = Action>) -> State {
    actions.into_iter().fold(State::default(), reduce)
}

fn descriptor() -> ImageDescriptor {
    ImageDescriptor::new("abc123", 400, 400)
}

fn color(value: &str) -> HexColor {
    HexColor::from_picker(value).expect("valid colour")
}

#[test]
fn full_session_from_upload_to_slider() {
    let state = run([Action::UploadStarted, Action::UploadSucceeded(descriptor())]);
    assert_eq!(state.layout(), Layout::Original);

    let state = reduce(state, Action::SelectRestore);
    assert_eq!(
        state.layout(),
        Layout::SideBySide {
            transformed_loading: true
        }
    );
    assert!(!state.can_toggle_compare());

    let token = state.generation();
    let state = reduce(state, Action::TransformedLoaded(token));
    assert_eq!(
        state.layout(),
        Layout::SideBySide {
            transformed_loading: false
        }
    );

    let state = reduce(state, Action::ToggleCompareMode);
    assert_eq!(state.layout(), Layout::Slider);

    let state = reduce(state, Action::ToggleCompareMode);
    assert!(!state.view().compare_mode);
}

#[test]
fn every_selection_yields_exactly_one_operation() {
    let uploaded = run([Action::UploadSucceeded(descriptor())]);

    let restore = reduce(uploaded.clone(), Action::SelectRestore);
    assert_eq!(restore.selection(), &Transformation::Restore);

    let removal = reduce(restore, Action::SelectRemoveBackground);
    assert_eq!(removal.selection(), &Transformation::RemoveBackground);
    assert!(!removal.selection().restore());

    let recolor = reduce(removal, Action::SelectBackgroundColor(color("#ffd700")));
    assert!(recolor.selection().remove_background());
    assert!(!recolor.selection().restore());
    assert_eq!(recolor.selection().background().map(HexColor::as_str), Some("ffd700"));

    let back = reduce(recolor, Action::SelectRestore);
    assert_eq!(back.selection(), &Transformation::Restore);
    assert!(back.selection().background().is_none());
}

#[test]
fn picker_value_is_stored_without_hash() {
    let state = run([
        Action::UploadSucceeded(descriptor()),
        Action::SelectBackgroundColor(color("#00ff00")),
    ]);
    assert_eq!(state.selection().background().map(HexColor::as_str), Some("00ff00"));
    assert!(state.selection().remove_background());
}

#[test]
fn new_upload_resets_everything() {
    let busy = run([
        Action::UploadSucceeded(descriptor()),
        Action::SelectRemoveBackground,
    ]);
    let token = busy.generation();
    let busy = reduce(busy, Action::TransformedLoaded(token));
    let busy = reduce(busy, Action::ToggleCompareMode);
    assert!(busy.view().compare_mode);

    let started = reduce(busy, Action::UploadStarted);
    assert!(started.descriptor().is_none());
    assert_eq!(started.selection(), &Transformation::None);
    assert!(!started.view().compare_mode);
    assert!(!started.view().transformed_image_loaded);

    let replaced = reduce(started, Action::UploadSucceeded(ImageDescriptor::new("other", 10, 20)));
    assert_eq!(replaced.descriptor().map(|d| d.public_id.as_str()), Some("other"));
    assert_eq!(replaced.layout(), Layout::Original);
}

#[test]
fn toggle_is_a_noop_until_transformed_image_loads() {
    let empty = State::default();
    assert_eq!(reduce(empty.clone(), Action::ToggleCompareMode), empty);

    let original_only = run([Action::UploadSucceeded(descriptor())]);
    assert_eq!(
        reduce(original_only.clone(), Action::ToggleCompareMode),
        original_only
    );

    let loading = reduce(original_only, Action::SelectRestore);
    assert_eq!(reduce(loading.clone(), Action::ToggleCompareMode), loading);
}

#[test]
fn stale_loaded_notification_is_ignored() {
    let first = run([Action::UploadSucceeded(descriptor()), Action::SelectRestore]);
    let stale = first.generation();

    let second = reduce(first, Action::SelectRemoveBackground);
    assert_eq!(reduce(second.clone(), Action::TransformedLoaded(stale)), second);

    let reuploaded = reduce(second, Action::UploadSucceeded(descriptor()));
    assert_eq!(
        reduce(reuploaded.clone(), Action::TransformedLoaded(stale)),
        reuploaded
    );
}

#[test]
fn selection_before_upload_does_nothing() {
    let state = run([
        Action::SelectRestore,
        Action::SelectRemoveBackground,
        Action::SelectBackgroundColor(color("ff0000")),
    ]);
    assert_eq!(state, State::default());
}

#[test]
fn reselecting_invalidates_loaded_flag_and_token() {
    let state = run([Action::UploadSucceeded(descriptor()), Action::SelectRestore]);
    let token = state.generation();
    let loaded = reduce(state, Action::TransformedLoaded(token));
    assert!(loaded.view().transformed_image_loaded);

    let again = reduce(loaded, Action::SelectRestore);
    assert!(!again.view().transformed_image_loaded);
    assert_ne!(again.generation(), token);
    assert!(again.generation().same_descriptor(&token));
}
