//! The document an editor operates on: scene plus the state around it.

use easel_api::{AppContext, AppProps, AppState, Scene};

use crate::history::History;

#[derive(Debug, Default)]
pub struct Document {
    pub scene: Scene,
    pub app_state: AppState,
    pub props: AppProps,
    pub context: AppContext,
    pub history: History,
}

impl Document {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            ..Default::default()
        }
    }
}
