//! Tokenizer for `Args` templates containing `%N` placeholders.

/// One piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    /// `%N`; leading zeros are insignificant and out-of-range digits saturate.
    Placeholder(usize),
}

/// An `Args` template split into literal and placeholder segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgsTemplate<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> ArgsTemplate<'a> {
    pub fn parse(text: &'a str) -> Self {
        let bytes = text.as_bytes();
        let mut segments = Vec::new();
        let mut literal_start = 0;
        let mut pos = 0;

        while pos < bytes.len() {
            if bytes[pos] != b'%' {
                pos += 1;
                continue;
            }
            let digits = bytes[pos + 1..]
                .iter()
                .take_while(|byte| byte.is_ascii_digit())
                .count();
            if digits == 0 {
                pos += 1;
                continue;
            }

            if literal_start < pos {
                segments.push(Segment::Literal(&text[literal_start..pos]));
            }
            let index = text[pos + 1..pos + 1 + digits]
                .parse::<usize>()
                .unwrap_or(usize::MAX);
            segments.push(Segment::Placeholder(index));
            pos += 1 + digits;
            literal_start = pos;
        }

        if literal_start < text.len() {
            segments.push(Segment::Literal(&text[literal_start..]));
        }

        Self { segments }
    }

    #[cfg(test)]
    fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Placeholder indices in left-to-right order.
    #[cfg(test)]
    fn placeholders(&self) -> impl Iterator<Item = usize> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(index) => Some(*index),
            Segment::Literal(_) => None,
        })
    }

    /// Concatenate literals with each placeholder's replacement.
    ///
    /// Replacements are inserted as-is and never rescanned. The first
    /// failing placeholder aborts rendering.
    pub fn render<E>(
        &self,
        mut replace: impl FnMut(usize) -> Result<String, E>,
    ) -> Result<String, E> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(index) => out.push_str(&replace(*index)?),
            }
        }
        Ok(out)
    }
}
