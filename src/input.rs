/// One tick's worth of player input.
///
/// Directional flags are level-triggered (true for as long as the key is
/// held).  `fire` and `cure` are edge-triggered: the input source sets them
/// for exactly one tick per key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub cure: bool,
    pub quit: bool,
}

impl FrameInput {
    /// Held arrow keys as unit steps, in up/down/left/right order.
    pub fn held_steps(&self) -> impl Iterator<Item = (i32, i32)> {
        [
            (self.up, (0, -1)),
            (self.down, (0, 1)),
            (self.left, (-1, 0)),
            (self.right, (1, 0)),
        ]
        .into_iter()
        .filter_map(|(held, step)| held.then_some(step))
    }
}
