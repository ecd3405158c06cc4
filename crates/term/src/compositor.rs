//! Compositor: stamps glyph assets into a formatted [`FrameBuffer`].
//!
//! Two layers:
//! - static: walls. Drawn once and then skipped while no render hook is in use.
//!   With a hook (e.g. one that emits color) walls are redrawn every frame so
//!   their styling stays in step with the dynamic entities.
//! - dynamic: fruit and the actor. Blocks stamped last frame are erased back to
//!   the floor before the new positions are stamped.

use crate::core::assets::{self, Asset};
use crate::core::{Coord, Placed, Session};
use crate::fb::FrameBuffer;
use crate::types::ObjectKind;

/// Per-glyph write hook.
///
/// Receives the target buffer cell, the asset glyph and the kind of object it
/// belongs to. Implementations decide what ends up in the cell.
pub trait RenderHook {
    fn render(&mut self, cell: &mut u8, glyph: u8, kind: ObjectKind);
}

impl<F> RenderHook for F
where
    F: FnMut(&mut u8, u8, ObjectKind),
{
    fn render(&mut self, cell: &mut u8, glyph: u8, kind: ObjectKind) {
        self(cell, glyph, kind)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Compositor {
    static_clean: bool,
    /// Cells whose blocks were stamped by the dynamic layer last frame.
    stamped: Vec<Coord>,
}

impl Compositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the static layer to be redrawn on the next frame.
    ///
    /// Call after reformatting the buffer.
    pub fn invalidate(&mut self) {
        self.static_clean = false;
        self.stamped.clear();
    }

    pub fn is_static_dirty(&self) -> bool {
        !self.static_clean
    }

    /// Stamp `asset` with its top-left glyph at interior position `(x, y)`.
    ///
    /// Exactly `asset.width()` glyphs per row are considered; glyphs missing
    /// from a short row leave the cell untouched.
    pub fn draw_asset(
        fb: &mut FrameBuffer,
        asset: &Asset,
        x: usize,
        y: usize,
        kind: ObjectKind,
        mut hook: Option<&mut (dyn RenderHook + '_)>,
    ) {
        debug_assert!(x + asset.width() <= fb.board_width());
        debug_assert!(y + asset.height() <= fb.board_height());

        for (dy, row) in asset.rows().enumerate() {
            for (dx, &glyph) in row.iter().take(asset.width()).enumerate() {
                let cell = fb.interior_glyph_mut(x + dx, y + dy);
                match hook.as_deref_mut() {
                    Some(h) => h.render(cell, glyph, kind),
                    None => *cell = glyph,
                }
            }
        }
    }

    /// Compose one full frame from `session`.
    pub fn draw_frame(
        &mut self,
        fb: &mut FrameBuffer,
        session: &Session,
        mut hook: Option<&mut (dyn RenderHook + '_)>,
    ) {
        let dims = session.dims();
        let s = fb.cell_size();

        // Erase last frame's dynamic blocks. Erasing over a wall loses its
        // glyphs, so the static layer has to come back too.
        for coord in self.stamped.drain(..) {
            let (x, y) = dims.glyph_origin(coord);
            fb.restore(x, y, s, s);
            if session.map().is_wall(coord) {
                self.static_clean = false;
            }
        }

        if hook.is_some() || !self.static_clean {
            for wall in session.walls() {
                let (x, y) = dims.glyph_origin(wall.coord());
                Self::draw_asset(fb, &assets::WALL, x, y, ObjectKind::Wall, hook.as_deref_mut());
            }
            self.static_clean = hook.is_none();
        }

        for fruit in session.fruits() {
            let asset = match fruit.kind.object_kind() {
                ObjectKind::FruitBonus => &assets::BONUS_FRUIT,
                ObjectKind::FruitInvincible => &assets::INVINCIBLE_FRUIT,
                _ => &assets::FRUIT,
            };
            self.stamp(fb, session, fruit.coord(), asset, fruit.kind.object_kind(), hook.as_deref_mut());
        }

        let actor = session.actor();
        let tail = actor.tail();
        for (i, segment) in tail.iter().enumerate() {
            let kind = if i + 1 == tail.len() {
                ObjectKind::ActorTail
            } else {
                ObjectKind::ActorBody
            };
            let asset = assets::segment_asset(segment.shape);
            self.stamp(fb, session, segment.coord(), asset, kind, hook.as_deref_mut());
        }
        self.stamp(
            fb,
            session,
            actor.head(),
            &assets::SNAKE_HEAD,
            ObjectKind::ActorHead,
            hook.as_deref_mut(),
        );
    }

    fn stamp(
        &mut self,
        fb: &mut FrameBuffer,
        session: &Session,
        coord: Coord,
        asset: &Asset,
        kind: ObjectKind,
        hook: Option<&mut (dyn RenderHook + '_)>,
    ) {
        let (x, y) = session.dims().glyph_origin(coord);
        Self::draw_asset(fb, asset, x, y, kind, hook);
        self.stamped.push(coord);
    }
}
