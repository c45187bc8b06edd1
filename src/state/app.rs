use crate::detect::ImageHandle;
use crate::state::Ledger;

/// The state of one interactive session.
///
/// Constructed fresh per run and owned by the session loop; the ledger is
/// mutated only through its own operations. Nothing here survives the
/// process.
#[derive(Debug, Default)]
pub struct AppState {
    /// The current search box contents.
    pub query: String,

    /// The attached meal photo, if any.
    pub image: Option<ImageHandle>,

    pub ledger: Ledger,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach_image(&mut self, image: ImageHandle) {
        self.image = Some(image);
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_fresh_state_is_empty() {
        let state = AppState::new();
        assert!(state.query.is_empty());
        assert!(!state.has_image());
        assert!(state.ledger.is_empty());
    }

    #[test]
    fn test_attach_image() {
        let mut state = AppState::new();
        state.attach_image(ImageHandle::new(PathBuf::from("plato.jpg")));
        assert!(state.has_image());
    }
}
