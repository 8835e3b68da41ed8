#![deny(warnings)]

/// A backtracking cursor over any iterator. Every item read is kept, so the
/// scanner can `restore` to any checkpoint inside the current lexeme, and
/// `start` always knows the absolute index where that lexeme began.
pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    seen: Vec<I::Item>,
    // index of the first item in the current lexeme
    start: usize,
    // items consumed so far
    cursor: usize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.peek()?;
        self.cursor += 1;
        Some(item)
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, seen: Vec::new(), start: 0, cursor: 0}
    }

    /// Where to come back to if a speculative scan fails.
    pub fn checkpoint(&self) -> usize { self.cursor }

    /// Rewind (or fast-forward over already seen items) to `pos`. Positions
    /// outside the current lexeme are clamped to it.
    pub fn restore(&mut self, pos: usize) {
        self.cursor = pos.max(self.start).min(self.seen.len());
    }

    /// Absolute index of the first item of the current lexeme.
    pub fn start(&self) -> usize { self.start }

    pub fn peek(&mut self) -> Option<I::Item> {
        if self.cursor == self.seen.len() {
            self.seen.push(self.src.next()?);
        }
        self.seen.get(self.cursor).cloned()
    }

    pub fn lexeme(&self) -> &[I::Item] {
        &self.seen[self.start..self.cursor]
    }

    /// Drop the current lexeme, the next one starts at the cursor.
    pub fn ignore(&mut self) {
        self.start = self.cursor;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let lexeme = self.lexeme().to_vec();
        self.ignore();
        lexeme
    }

    /// Consume the next item only if it satisfies `pred`.
    pub fn accept_if<P>(&mut self, pred: P) -> Option<I::Item>
        where P: Fn(&I::Item) -> bool
    {
        let next = self.peek()?;
        if !pred(&next) {
            return None;
        }
        self.cursor += 1;
        Some(next)
    }

    /// Consume items while `pred` holds, returns if the scanner advanced.
    /// Not `skip_while`, that name belongs to the `Iterator` adapter.
    pub fn skip_matching<P>(&mut self, pred: P) -> bool
        where P: Fn(&I::Item) -> bool
    {
        let from = self.cursor;
        while self.accept_if(&pred).is_some() {}
        self.cursor > from
    }
}


impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_if(|next| next == what)
    }

    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        self.accept_if(|next| any.contains(next))
    }
}
