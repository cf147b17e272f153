//! Shortcut ownership across groups and their main projects.

pub mod coordinator;
mod invariants;

pub use coordinator::{
    MainProjectChange, ShortcutResolution, apply_main_project_change, candidate_replacements,
    current_main_project, release_main_slot, resolve_shortcut_for_new_main,
    should_adopt_shortcut_on_save,
};
pub use invariants::check_shortcut_invariants;
