/// Progressive reveal of a string, one char at a time.
///
/// Yields `""`, then every longer prefix up to the full string: a target of
/// N chars produces N + 1 items. Once exhausted it stays exhausted until
/// [`Reveal::reset`] is called.
pub struct Reveal<'a> {
    target: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Reveal<'a> {
    pub fn new(target: &'a str) -> Self {
        Reveal {
            target,
            pos: 0,
            done: false,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.done = false;
    }

    /// Prefixes still to come.
    pub fn remaining(&self) -> usize {
        if self.done {
            0
        } else {
            self.target[self.pos..].chars().count() + 1
        }
    }
}

impl<'a> Iterator for Reveal<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        let prefix = &self.target[..self.pos];
        match self.target[self.pos..].chars().next() {
            Some(c) => self.pos += c.len_utf8(),
            None => self.done = true,
        }
        Some(prefix)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Reveal<'_> {}
