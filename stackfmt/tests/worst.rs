use rand::Rng;
use stackfmt::worst::{Array, WorstCase};

fn rendered_len<T: WorstCase>(value: T) -> usize {
    format!("{}", value).len()
}

#[test]
fn integer_max_lens() {
    assert_eq!(<i8 as WorstCase>::MAX_LEN, 4);
    assert_eq!(<i16 as WorstCase>::MAX_LEN, 6);
    assert_eq!(<i32 as WorstCase>::MAX_LEN, 11);
    assert_eq!(<i64 as WorstCase>::MAX_LEN, 20);
    assert_eq!(<i128 as WorstCase>::MAX_LEN, 40);
    assert_eq!(<u8 as WorstCase>::MAX_LEN, 3);
    assert_eq!(<u16 as WorstCase>::MAX_LEN, 5);
    assert_eq!(<u32 as WorstCase>::MAX_LEN, 10);
    assert_eq!(<u64 as WorstCase>::MAX_LEN, 20);
    assert_eq!(<u128 as WorstCase>::MAX_LEN, 39);
}

#[test]
fn small_integer_worst_cases_are_maximal() {
    assert_eq!(rendered_len(<i8 as WorstCase>::WORST), <i8 as WorstCase>::MAX_LEN);
    for v in i8::MIN..=i8::MAX {
        assert!(rendered_len(v) <= <i8 as WorstCase>::MAX_LEN);
    }

    assert_eq!(rendered_len(<u8 as WorstCase>::WORST), <u8 as WorstCase>::MAX_LEN);
    for v in u8::MIN..=u8::MAX {
        assert!(rendered_len(v) <= <u8 as WorstCase>::MAX_LEN);
    }

    assert_eq!(rendered_len(<i16 as WorstCase>::WORST), <i16 as WorstCase>::MAX_LEN);
    for v in i16::MIN..=i16::MAX {
        assert!(rendered_len(v) <= <i16 as WorstCase>::MAX_LEN);
    }

    assert_eq!(rendered_len(<u16 as WorstCase>::WORST), <u16 as WorstCase>::MAX_LEN);
    for v in u16::MIN..=u16::MAX {
        assert!(rendered_len(v) <= <u16 as WorstCase>::MAX_LEN);
    }
}

#[test]
fn wide_integer_worst_cases_are_maximal() {
    macro_rules! check {
        ($($t:ty),*) => {
            let mut rng = rand::rng();
            $(
                assert_eq!(
                    rendered_len(<$t as WorstCase>::WORST),
                    <$t as WorstCase>::MAX_LEN
                );
                for _ in 0..100_000 {
                    let v: $t = rng.random();
                    assert!(rendered_len(v) <= <$t as WorstCase>::MAX_LEN);
                }
            )*
        };
    }
    check!(i32, u32, i64, u64, i128, u128);

    let mut rng = rand::rng();
    assert_eq!(rendered_len(<isize as WorstCase>::WORST), <isize as WorstCase>::MAX_LEN);
    assert_eq!(rendered_len(<usize as WorstCase>::WORST), <usize as WorstCase>::MAX_LEN);
    for _ in 0..100_000 {
        let v = rng.random::<i64>() as isize;
        assert!(rendered_len(v) <= <isize as WorstCase>::MAX_LEN);
        let v = rng.random::<u64>() as usize;
        assert!(rendered_len(v) <= <usize as WorstCase>::MAX_LEN);
    }
}

#[test]
fn bool_worst_case_is_false() {
    assert_eq!(format!("{}", <bool as WorstCase>::WORST), "false");
    assert_eq!(<bool as WorstCase>::MAX_LEN, 5);
    assert!(rendered_len(true) <= <bool as WorstCase>::MAX_LEN);
}

#[test]
fn char_worst_case_is_four_bytes() {
    assert_eq!(<char as WorstCase>::MAX_LEN, 4);
    assert_eq!(rendered_len(<char as WorstCase>::WORST), 4);
    assert!(rendered_len('a') <= <char as WorstCase>::MAX_LEN);
    assert!(rendered_len('\u{80}') <= <char as WorstCase>::MAX_LEN);
}

#[test]
fn references_delegate_to_the_pointee() {
    assert_eq!(<&i8 as WorstCase>::MAX_LEN, 4);
    assert_eq!(rendered_len(<&i8 as WorstCase>::WORST), 4);
    let v = 250u8;
    assert_eq!(format!("{}", &v), "250");
}

#[test]
fn arrays_render_elements_back_to_back() {
    let arr = Array([1u8, 22, 133]);
    assert_eq!(format!("{}", arr), "122133");
    assert_eq!(<Array<u8, 3> as WorstCase>::MAX_LEN, 9);
    assert_eq!(format!("{}", <Array<u8, 3> as WorstCase>::WORST), "255255255");
    assert_eq!(<Array<i16, 0> as WorstCase>::MAX_LEN, 0);
}
