use bitonic_union::{bitonic::{self, Order}, Error};

/// The values `1 ..= len` ascending up to `peak` and descending after it.
fn bitonic_array(len: usize, peak: usize) -> Vec<i32> {
    let len = len as i32;
    let peak = peak as i32;

    (1 ..= peak + 1).chain((peak + 2 ..= len).rev()).collect()
}

#[test]
fn sorted_arrays() {
    for len in 1 ..= 10 {
        let ascending: Vec<i32> = (1 ..= len).collect();
        let descending: Vec<i32> = (1 ..= len).rev().collect();

        for (index, value) in ascending.iter().enumerate() {
            assert_eq!(Ok(Some(index)), bitonic::search(&ascending, value));
        }
        for (index, value) in descending.iter().enumerate() {
            assert_eq!(Ok(Some(index)), bitonic::search(&descending, value));
        }
    }
}

#[test]
fn every_peak_position() {
    for len in 1 ..= 20 {
        for peak in 0 .. len {
            let array = bitonic_array(len, peak);

            for (index, value) in array.iter().enumerate() {
                assert_eq!(Ok(Some(index)), bitonic::search(&array, value), "{:?}", array);
            }
            assert_eq!(Ok(None), bitonic::search(&array, &0), "{:?}", array);
            assert_eq!(Ok(None), bitonic::search(&array, &(len as i32 + 1)), "{:?}", array);
        }
    }
}

#[test]
fn peak_in_the_middle() {
    let array = [1, 2, 3, 5, 4];

    assert_eq!(Ok(Some(3)), bitonic::search(&array, &5));
    assert_eq!(Ok(Some(4)), bitonic::search(&array, &4));
    assert_eq!(Ok(None), bitonic::search(&array, &6));
}

#[test]
fn gaps_between_values() {
    let array = [-8, -3, 0, 10, 40, 35, 12, 11, -20];

    for (index, value) in array.iter().enumerate() {
        assert_eq!(Ok(Some(index)), bitonic::search(&array, value));
    }
    for missing in &[-21, -19, -5, 1, 36, 41] {
        assert_eq!(Ok(None), bitonic::search(&array, missing));
    }
}

#[test]
fn empty_and_small_arrays() {
    let empty: [i32; 0] = [];
    assert_eq!(Ok(None), bitonic::search(&empty, &1));

    assert_eq!(Ok(Some(0)), bitonic::search(&[7], &7));
    assert_eq!(Ok(None), bitonic::search(&[7], &8));

    // Two elements are scanned, so equal elements are no error.
    assert_eq!(Ok(Some(0)), bitonic::search(&[3, 3], &3));
}

#[test]
fn not_bitonic() {
    // A valley.
    assert_eq!(Err(Error::InvalidInput { index: 1 }), bitonic::search(&[3, 1, 2], &7));
    assert_eq!(Err(Error::InvalidInput { index: 2 }), bitonic::search(&[5, 4, 3, 4, 5], &9));
    // A plateau is not strictly monotonic.
    assert_eq!(Err(Error::InvalidInput { index: 2 }), bitonic::search(&[1, 2, 2, 1, 0], &9));
    assert_eq!(Err(Error::InvalidInput { index: 1 }), bitonic::search(&[1, 1, 1], &0));
}

#[test]
fn middle_is_checked_first() {
    // The target is found before the broken window is looked at.
    assert_eq!(Ok(Some(1)), bitonic::search(&[3, 1, 2], &1));
}

#[test]
fn sorted_search_in_both_directions() {
    let ascending = [2, 4, 6, 8, 10, 12];
    let descending = [12, 10, 8, 6, 4, 2];

    for index in 0 .. ascending.len() {
        assert_eq!(Some(index), bitonic::search_sorted(&ascending, &ascending[index], Order::Ascending));
        assert_eq!(Some(index), bitonic::search_sorted(&descending, &descending[index], Order::Descending));
    }

    assert_eq!(None, bitonic::search_sorted(&ascending, &5, Order::Ascending));
    assert_eq!(None, bitonic::search_sorted(&descending, &13, Order::Descending));
    assert_eq!(None, bitonic::search_sorted(&[] as &[i32], &1, Order::Ascending));
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_search() {
    let array = bitonic_array(1000, 321);
    let targets: Vec<i32> = (-5 .. 1010).collect();

    let found = bitonic::par_search_all(&array, &targets).unwrap();
    let expected: Vec<Option<usize>> = targets
        .iter()
        .map(|target| bitonic::search(&array, target).unwrap())
        .collect();

    assert_eq!(expected, found);
    assert_eq!(Some(322), found[(1000 + 5) as usize]);
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_search_reports_broken_arrays() {
    assert_eq!(
        Err(Error::InvalidInput { index: 1 }),
        bitonic::par_search_all(&[3, 1, 2], &[3, 9]),
    );
}
