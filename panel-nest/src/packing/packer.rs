//! Maximal-rectangles bookkeeping with the Best-Area-Fit placement heuristic.
//!
//! The unused space of a bin is described by a list of maximal free rectangles, which may overlap
//! each other. A box is placed in the lower-left corner of the free rectangle it leaves the least
//! area unused in. Afterwards, every free rectangle overlapping the box is split into the maximal
//! strips around it and rectangles contained in others are discarded.

use ordered_float::OrderedFloat;

use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::primitives::Rect;
use crate::util::{PackerConfig, TieBreak};

/// A free rectangle together with the orientation a box would be placed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitCandidate {
    pub free_rect_idx: usize,
    pub width: f64,
    pub height: f64,
    pub rotated: bool,
    pub score: FitScore,
}

/// Lexicographically ordered, lower is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FitScore {
    pub leftover_area: OrderedFloat<f64>,
    pub secondary: OrderedFloat<f64>,
    pub y: OrderedFloat<f64>,
    pub x: OrderedFloat<f64>,
}

impl FitScore {
    pub fn new(free_rect: &Rect, cw: f64, ch: f64, tie_break: TieBreak) -> Self {
        let secondary = match tie_break {
            TieBreak::BottomLeft => 0.0,
            TieBreak::ShortSideFit => {
                f64::min(free_rect.width() - cw, free_rect.height() - ch)
            }
        };
        Self {
            leftover_area: OrderedFloat(free_rect.area() - cw * ch),
            secondary: OrderedFloat(secondary),
            y: OrderedFloat(free_rect.y_min),
            x: OrderedFloat(free_rect.x_min),
        }
    }
}

/// Evaluates every free rectangle and enabled orientation for a `w` x `h` box.
/// Returns the candidate with the lowest [`FitScore`], the earliest one in case of a full tie.
/// The unrotated orientation is always evaluated first.
pub fn best_area_fit(
    free_rects: &[Rect],
    w: f64,
    h: f64,
    config: &PackerConfig,
) -> Option<FitCandidate> {
    let orientations = [(w, h, false), (h, w, true)];
    let n_orientations = match config.allow_rotation {
        true => 2,
        false => 1,
    };

    free_rects
        .iter()
        .enumerate()
        .flat_map(|(idx, fr)| {
            orientations[..n_orientations]
                .iter()
                .filter(move |(cw, ch, _)| *cw <= fr.width() && *ch <= fr.height())
                .map(move |&(cw, ch, rotated)| FitCandidate {
                    free_rect_idx: idx,
                    width: cw,
                    height: ch,
                    rotated,
                    score: FitScore::new(fr, cw, ch, config.tie_break),
                })
        })
        .min_by_key(|c| c.score)
}

/// Splits every free rectangle overlapping `used` into the (up to four) maximal strips of it
/// which lie outside of `used`. Untouched rectangles keep their order, new strips are appended.
pub fn split_free_rects(free_rects: &mut Vec<Rect>, used: Rect) {
    let mut strips = vec![];
    free_rects.retain(|fr| match Rect::intersection(*fr, used) {
        None => true,
        Some(_) => {
            strips.extend(strips_outside(fr, &used));
            false
        }
    });
    free_rects.extend(strips);
}

/// Maximal strips of `fr` outside of `used`, in the order right, top, left, bottom.
/// For a box placed in the lower-left corner of `fr` only the right and top strip remain.
fn strips_outside(fr: &Rect, used: &Rect) -> impl Iterator<Item = Rect> {
    let right = Rect {
        x_min: used.x_max,
        ..*fr
    };
    let top = Rect {
        y_min: used.y_max,
        ..*fr
    };
    let left = Rect {
        x_max: used.x_min,
        ..*fr
    };
    let bottom = Rect {
        y_max: used.y_min,
        ..*fr
    };
    [right, top, left, bottom]
        .into_iter()
        .filter(|r| r.width() > 0.0 && r.height() > 0.0)
}

/// Removes every free rectangle which is contained in another one.
/// Of a set of identical rectangles, only the first is kept.
pub fn prune_free_rects(free_rects: &mut Vec<Rect>) {
    let redundant = (0..free_rects.len())
        .map(|i| {
            let fr = free_rects[i];
            free_rects.iter().enumerate().any(|(j, other)| {
                i != j
                    && other.relation_to(fr) == GeoRelation::Surrounding
                    && (*other != fr || j < i)
            })
        })
        .collect::<Vec<_>>();

    let mut idx = 0;
    free_rects.retain(|_| {
        let keep = !redundant[idx];
        idx += 1;
        keep
    });
}
