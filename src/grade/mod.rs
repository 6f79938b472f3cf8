mod config;
mod error;
mod verdict;

pub use config::GradeConfig;
pub use error::{Error, Side};
pub use verdict::{Mismatch, Verdict};

use crate::model::answer::Answer;
use crate::model::position::PositionClass;

/// Grades `candidate` against `reference`, returning `true` when they match.
///
/// Geometry labels and central atoms must match exactly. Every graded class
/// must have the same number of positions on both sides; labels are then
/// compared in key order, or as a multiset when `config` ignores order for
/// that class.
///
/// # Errors
///
/// Returns [`Error::MissingCentralAtom`] when the geometry labels agree but
/// either answer lacks the `c0` key.
pub fn grade(
    candidate: &Answer,
    reference: &Answer,
    config: &GradeConfig,
) -> Result<bool, Error> {
    evaluate(candidate, reference, config).map(|v| v.is_correct())
}

/// Like [`grade`], but reports which check failed.
pub fn evaluate(
    candidate: &Answer,
    reference: &Answer,
    config: &GradeConfig,
) -> Result<Verdict, Error> {
    if candidate.geometry != reference.geometry {
        tracing::debug!(
            expected = %reference.geometry,
            found = %candidate.geometry,
            "geometry mismatch"
        );
        return Ok(Mismatch::Geometry {
            expected: reference.geometry.clone(),
            found: candidate.geometry.clone(),
        }
        .into());
    }

    let found = candidate
        .central()
        .ok_or(Error::missing_central_atom(Side::Candidate))?;
    let expected = reference
        .central()
        .ok_or(Error::missing_central_atom(Side::Reference))?;
    if found != expected {
        tracing::debug!(expected, found, "central atom mismatch");
        return Ok(Mismatch::CentralAtom {
            expected: expected.to_string(),
            found: found.to_string(),
        }
        .into());
    }

    for class in PositionClass::GRADED {
        let ignore_order = config.ignores_order(class);
        if let Some(mismatch) = compare_class(candidate, reference, class, ignore_order) {
            return Ok(mismatch.into());
        }
    }

    Ok(Verdict::Correct)
}

fn compare_class(
    candidate: &Answer,
    reference: &Answer,
    class: PositionClass,
    ignore_order: bool,
) -> Option<Mismatch> {
    let mut found = candidate.labels_of(class);
    let mut expected = reference.labels_of(class);

    if found.len() != expected.len() {
        tracing::debug!(
            %class,
            expected = expected.len(),
            found = found.len(),
            "position count mismatch"
        );
        return Some(Mismatch::Count {
            class,
            expected: expected.len(),
            found: found.len(),
        });
    }

    if ignore_order {
        found.sort_unstable();
        expected.sort_unstable();
    } else if expected.is_empty() {
        tracing::trace!(%class, "no reference positions, skipped");
        return None;
    }

    if found != expected {
        tracing::debug!(%class, order_sensitive = !ignore_order, "label mismatch");
        return Some(Mismatch::Labels {
            class,
            order_sensitive: !ignore_order,
        });
    }

    tracing::trace!(%class, positions = expected.len(), "class matched");
    None
}
