use studentdb_core::{adjusted_average, grade, grade_default, Grade};

#[test]
fn thresholds_are_inclusive_lower_bounds() {
    let table = [
        (100.0, Grade::APlus),
        (90.0, Grade::APlus),
        (89.999, Grade::A),
        (80.0, Grade::A),
        (79.99, Grade::B),
        (70.0, Grade::B),
        (69.5, Grade::C),
        (60.0, Grade::C),
        (59.9, Grade::D),
        (50.0, Grade::D),
        (49.99, Grade::F),
        (0.0, Grade::F),
    ];

    for (average, expected) in table {
        assert_eq!(Grade::from_average(average), expected, "average {average}");
    }
}

#[test]
fn exact_ninety_average_is_a_plus() {
    assert_eq!(grade_default(&[85, 95]), Grade::APlus);
    assert_eq!(grade_default(&[90, 89]), Grade::A);
}

#[test]
fn grade_letters_render() {
    let letters: Vec<String> = [Grade::APlus, Grade::A, Grade::B, Grade::C, Grade::D, Grade::F]
        .iter()
        .map(Grade::to_string)
        .collect();
    assert_eq!(letters, vec!["A+", "A", "B", "C", "D", "F"]);
}

#[test]
fn grace_is_added_per_mark_and_capped() {
    assert_eq!(adjusted_average(&[88, 92, 79], 0), 259.0 / 3.0);
    assert_eq!(adjusted_average(&[95, 40], 10), 75.0);
    assert_eq!(grade(&[45, 45], 5), Grade::D);
}

#[test]
fn grace_defaults_to_zero() {
    let marks = [67, 73, 71];
    assert_eq!(grade_default(&marks), grade(&marks, 0));
    assert_eq!(grade_default(&marks), Grade::B);
}

#[test]
fn more_grace_never_lowers_average_or_grade() {
    let mark_sets: [&[i32]; 6] = [
        &[0],
        &[100],
        &[49, 50, 51],
        &[88, 92, 79],
        &[12, 99, 63, 70],
        &[59, 69, 79, 89],
    ];

    for marks in mark_sets {
        let mut previous_average = adjusted_average(marks, -5);
        let mut previous_grade = grade(marks, -5);
        for grace in 0..=110 {
            let average = adjusted_average(marks, grace);
            let current = grade(marks, grace);
            assert!(average >= previous_average, "{marks:?} grace {grace}");
            assert!(current >= previous_grade, "{marks:?} grace {grace}");
            assert!(average <= 100.0);
            previous_average = average;
            previous_grade = current;
        }
    }
}
