use bevy::prelude::*;

use crate::assembly::{AssemblyCommand, PartsStorage};
use crate::geometry::MeshCache;
use crate::resources::EditorConfig;
use crate::systems::{
    apply_assembly_commands_system, refresh_meshes_system, sync_assembly_profile_system,
};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum AssemblySet {
    Commands,
    Derived,
}

/// Editor-side assembly: command handling, derived vehicle profile and meshes.
#[derive(Default)]
pub struct AssemblyPlugin {
    pub initial: PartsStorage,
    pub editor: EditorConfig,
}

impl AssemblyPlugin {
    pub fn with_storage(initial: PartsStorage) -> Self {
        Self {
            initial,
            ..Default::default()
        }
    }
}

impl Plugin for AssemblyPlugin {
    fn build(&self, app: &mut App) {
        info!("Assembly plugin starting with {} parts", self.initial.len());

        app.add_event::<AssemblyCommand>()
            .insert_resource(self.initial.clone())
            .insert_resource(self.editor.clone())
            .init_resource::<MeshCache>();

        app.configure_sets(Update, (AssemblySet::Commands, AssemblySet::Derived).chain());

        app.add_systems(
            Update,
            (
                apply_assembly_commands_system.in_set(AssemblySet::Commands),
                (sync_assembly_profile_system, refresh_meshes_system).in_set(AssemblySet::Derived),
            ),
        );
    }
}
