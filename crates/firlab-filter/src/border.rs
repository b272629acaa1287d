/// How a convolution resolves samples that fall outside the matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BorderMode {
    /// Out-of-range samples contribute zero.
    ///
    /// Example: ...d c b a | 0 0 0 0...
    Constant,

    /// The outermost sample is repeated.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// Mirror starting with the sample 'next' to the edge.
    ///
    /// Example: ...d c b a | b c d e...
    #[default]
    Reflect101,

    /// Mirror starting with the edge sample itself.
    ///
    /// Example: ...d c b a | a b c d...
    Reflect,

    /// Wrap around to the opposite side.
    ///
    /// Example: ...d c b a | w x y z...
    Wrap,
}

impl BorderMode {
    #[inline]
    fn reflect(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let mut i = i;
        while i < 0 || i >= len {
            if i < 0 {
                i = -i - 1;
            } else if i >= len {
                i = 2 * len - i - 1;
            }
        }
        i as usize
    }

    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let mut i = i;
        while i < 0 || i >= len {
            if i < 0 {
                i = -i;
            } else if i >= len {
                i = 2 * len - i - 2;
            }
        }
        i as usize
    }

    #[inline]
    fn wrap(i: isize, len: usize) -> usize {
        ((i % len as isize + len as isize) % len as isize) as usize
    }

    /// Maps index `i` to a valid index within `[0, len)` according to the border mode.
    ///
    /// # Arguments
    /// - `i`: The (possibly out-of-range) index.
    /// - `len`: The valid length of the dimension.
    ///
    /// # Returns
    /// The mapped index, or `None` when the sample contributes nothing, i.e.
    /// [`BorderMode::Constant`] outside the range or an empty dimension.
    ///
    /// # Example
    ///
    /// ```
    /// use firlab_filter::border::BorderMode;
    ///
    /// assert_eq!(BorderMode::Reflect101.map_index(5, 5), Some(3));
    /// assert_eq!(BorderMode::Constant.map_index(5, 5), None);
    /// ```
    #[inline]
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        if i >= 0 && (i as usize) < len {
            return Some(i as usize);
        }
        match self {
            BorderMode::Constant => None,
            BorderMode::Replicate => Some(i.clamp(0, len as isize - 1) as usize),
            BorderMode::Reflect => Some(Self::reflect(i, len)),
            BorderMode::Reflect101 => Some(Self::reflect101(i, len)),
            BorderMode::Wrap => Some(Self::wrap(i, len)),
        }
    }
}
