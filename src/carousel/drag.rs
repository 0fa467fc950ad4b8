// Drag Session
// One pointer interaction on the strip, from press to release

/// Live drag, discarded on release
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_x: f32,
    pub current_x: f32,
}

impl DragSession {
    pub fn start(x: f32) -> Self {
        Self {
            start_x: x,
            current_x: x,
        }
    }

    pub fn update(&mut self, x: f32) {
        self.current_x = x;
    }

    /// Net displacement, positive when the pointer moved left
    pub fn delta(&self) -> f32 {
        self.start_x - self.current_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_sign() {
        let mut drag = DragSession::start(500.0);
        drag.update(380.0);
        assert_eq!(drag.delta(), 120.0);
        drag.update(620.0);
        assert_eq!(drag.delta(), -120.0);
    }
}
