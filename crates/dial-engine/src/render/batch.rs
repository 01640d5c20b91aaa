use std::ops::Range;

/// Which instanced pipeline draws a run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Pipe {
    Shape,
    Glyph,
}

/// Consecutive instances of one pipeline, in paint order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Run {
    pub pipe: Pipe,
    pub instances: Range<u32>,
}

/// Ordered list of draw runs built while walking a draw list.
///
/// Appending to the same pipeline as the previous run extends that run, so
/// the number of pipeline switches equals the number of kind changes in the
/// paint order.
#[derive(Debug, Default)]
pub(crate) struct RunList {
    runs: Vec<Run>,
}

impl RunList {
    pub fn clear(&mut self) {
        self.runs.clear();
    }

    /// Records that instances `instances` of `pipe` paint next.
    pub fn push(&mut self, pipe: Pipe, instances: Range<u32>) {
        if instances.is_empty() {
            return;
        }
        if let Some(last) = self.runs.last_mut() {
            if last.pipe == pipe && last.instances.end == instances.start {
                last.instances.end = instances.end;
                return;
            }
        }
        self.runs.push(Run { pipe, instances });
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pipe: Pipe, instances: Range<u32>) -> Run {
        Run { pipe, instances }
    }

    #[test]
    fn same_pipe_runs_merge() {
        let mut list = RunList::default();
        list.push(Pipe::Shape, 0..1);
        list.push(Pipe::Shape, 1..2);
        list.push(Pipe::Shape, 2..5);
        assert_eq!(list.runs(), &[run(Pipe::Shape, 0..5)]);
    }

    #[test]
    fn kind_changes_split_runs() {
        let mut list = RunList::default();
        list.push(Pipe::Shape, 0..3);
        list.push(Pipe::Glyph, 0..2);
        list.push(Pipe::Shape, 3..4);
        list.push(Pipe::Glyph, 2..4);
        assert_eq!(
            list.runs(),
            &[
                run(Pipe::Shape, 0..3),
                run(Pipe::Glyph, 0..2),
                run(Pipe::Shape, 3..4),
                run(Pipe::Glyph, 2..4),
            ]
        );
    }

    #[test]
    fn empty_ranges_are_ignored() {
        let mut list = RunList::default();
        list.push(Pipe::Shape, 0..2);
        list.push(Pipe::Glyph, 0..0);
        list.push(Pipe::Shape, 2..3);
        assert_eq!(list.runs(), &[run(Pipe::Shape, 0..3)]);

        list.clear();
        assert!(list.runs().is_empty());
    }
}
