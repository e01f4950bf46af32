use bevy::prelude::*;

use crate::assembly::{AssemblyCommand, PartsStorage};
use crate::components::{AssemblyProfile, PhysicsComponent};
use crate::geometry::MeshCache;
use crate::resources::EditorConfig;

/// Fold this frame's commands into one new snapshot and swap it in.
///
/// Each command reads the snapshot the previous one produced; the resource is
/// only written when the result differs, so change detection stays quiet for
/// rejected commands. Reshapes are held to the editor's point-count bounds.
pub fn apply_assembly_commands_system(
    mut commands: EventReader<AssemblyCommand>,
    mut storage: ResMut<PartsStorage>,
    editor: Res<EditorConfig>,
) {
    let mut next: Option<PartsStorage> = None;
    for command in commands.read() {
        debug!("Applying {:?}", command);
        let current = next.as_ref().unwrap_or(&*storage);
        next = Some(match command {
            AssemblyCommand::Reshape { part, shape } => AssemblyCommand::Reshape {
                part: *part,
                shape: editor.clamp_shape(shape),
            }
            .apply(current),
            other => other.apply(current),
        });
    }

    if let Some(next) = next {
        if next != *storage {
            *storage = next;
        }
    }
}

pub fn refresh_meshes_system(storage: Res<PartsStorage>, mut cache: ResMut<MeshCache>) {
    if storage.is_changed() {
        cache.refresh(&storage);
    }
}

/// Keep vehicle mass and capabilities in step with the assembly.
pub fn sync_assembly_profile_system(
    storage: Res<PartsStorage>,
    mut vehicles: Query<(&mut AssemblyProfile, &mut PhysicsComponent)>,
) {
    if !storage.is_changed() {
        return;
    }
    let profile = AssemblyProfile::from_storage(&storage);
    for (mut current, mut physics) in vehicles.iter_mut() {
        if *current != profile {
            *current = profile;
            physics.mass = profile.mass;
        }
    }
}
