#[macro_export]
macro_rules! iff {
    ($x: expr, $y: expr, $z: expr) => {
        if $x {
            $y
        } else {
            $z
        }
    };
}

/// ```compile_fail
/// let _ = minmax::min!(1u8, 1u16);
/// ```
#[macro_export]
macro_rules! min {
    ($x: expr, $y: expr) => {
        $crate::cmp::min($x, $y)
    };
}

/// ```compile_fail
/// let _ = minmax::max!(1u32, 1usize);
/// ```
#[macro_export]
macro_rules! max {
    ($x: expr, $y: expr) => {
        $crate::cmp::max($x, $y)
    };
}

#[macro_export]
macro_rules! min_t {
    ($t: ty, $x: expr, $y: expr) => {
        $crate::cmp::min_t::<$t, _, _>($x, $y)
    };
}

#[macro_export]
macro_rules! max_t {
    ($t: ty, $x: expr, $y: expr) => {
        $crate::cmp::max_t::<$t, _, _>($x, $y)
    };
}

/// Minimum for compile-time constants.
///
/// Expands in place without temporaries so it is accepted in `const` items and
/// array lengths. Operands are evaluated more than once; pass only
/// side-effect-free constants.
///
/// ```
/// use minmax::simple_min;
///
/// const BURST: usize = simple_min!(32, 64);
/// let ring = [0u8; simple_min!(BURST, 16)];
/// assert_eq!(ring.len(), 16);
/// ```
#[macro_export]
macro_rules! simple_min {
    ($x: expr, $y: expr) => {
        $crate::iff!(($x) < ($y), $x, $y)
    };
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    const WINDOW: u32 = simple_min!(1 << 10, 4096);

    fn bump(calls: &Cell<u32>, v: i32) -> i32 {
        calls.set(calls.get() + 1);
        v
    }

    #[test]
    fn macros_evaluate_each_operand_once() {
        let a = Cell::new(0);
        let b = Cell::new(0);
        assert_eq!(min!(bump(&a, 3), bump(&b, 5)), 3);
        assert_eq!(max!(bump(&a, 3), bump(&b, 5)), 5);
        assert_eq!(min_t!(i64, bump(&a, -1), bump(&b, 0)), -1i64);
        assert_eq!(max_t!(i64, bump(&a, -1), bump(&b, 0)), 0i64);
        assert_eq!((a.get(), b.get()), (4, 4));
    }

    #[test]
    fn simple_min_in_const_position() {
        let table = [0u16; simple_min!(3, 5)];
        assert_eq!(table.len(), 3);
        assert_eq!(WINDOW, 1024);
        assert_eq!(simple_min!(7, 7), 7);
        assert_eq!(simple_min!(-1, 0), crate::cmp::min(-1, 0));
    }

    #[test]
    fn increments_happen_once() {
        let mut i = 0;
        let m = max!({ i += 1; i }, 0);
        assert_eq!((m, i), (1, 1));
    }
}
