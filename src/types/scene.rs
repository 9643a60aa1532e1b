//! Preset animated scenes.

use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::types::check_range;

/// Index of one of the firmware's ten built-in scenes (0-9).
///
/// # Examples
///
/// ```
/// use illumi_led::Scene;
///
/// assert!(Scene::create(9).is_some());
/// assert!(Scene::create(10).is_none());
/// ```
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub struct Scene {
    pub(crate) id: u8,
}

impl Scene {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 9;

    pub fn new() -> Self {
        Scene { id: Self::MIN }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn create(id: u8) -> Option<Self> {
        Self::try_from(id).ok()
    }
}

impl TryFrom<u8> for Scene {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Error> {
        check_range("scene", id, Self::MIN, Self::MAX).map(|id| Scene { id })
    }
}

impl From<Scene> for u8 {
    fn from(scene: Scene) -> u8 {
        scene.id
    }
}
