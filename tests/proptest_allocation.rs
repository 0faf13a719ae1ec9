//! Свойства кодека меток и алгоритмов подбора мест: тотальность поиска
//! на произвольной занятости, инварианты кандидатных наборов, рендер.

use std::collections::HashSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use cinema_booking_system::{
    BookingController, BookingError, Movie, Screening, Seat, SeatingConfig, SeatingDisplay,
    DEFAULT_STARTING_ROW,
};

/* ---------- strategies & helpers ---------- */

fn controller(rows: usize, seats_per_row: usize) -> BookingController {
    let screening = Screening::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
        SeatingConfig::new(rows, seats_per_row).unwrap(),
        Movie::new("PropMovie"),
    );
    BookingController::new(screening)
}

// Зал с занятым подмножеством мест, зафиксированным одной бронью.
fn with_occupancy(rows: usize, seats_per_row: usize, taken: &[(usize, usize)]) -> BookingController {
    let mut controller = controller(rows, seats_per_row);
    if !taken.is_empty() {
        let seats = taken
            .iter()
            .map(|&(row, column)| Seat::new(row, column).unwrap())
            .collect();
        let booking = controller.new_booking().with_seats(seats);
        controller.save_booking(booking).unwrap();
    }
    controller
}

/// Размеры зала в допустимых пределах.
fn arb_dims() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=26, 1usize..=50)
}

/// Зал плюс произвольное подмножество занятых клеток (без повторов).
fn arb_occupied_hall() -> impl Strategy<Value = (usize, usize, Vec<(usize, usize)>)> {
    arb_dims().prop_flat_map(|(rows, seats_per_row)| {
        let total = rows * seats_per_row;
        prop::collection::hash_set(0..total, 0..=total.min(60)).prop_map(move |cells| {
            let taken = cells
                .into_iter()
                .map(|cell| (cell / seats_per_row, cell % seats_per_row))
                .collect();
            (rows, seats_per_row, taken)
        })
    })
}

/* ---------- label codec ---------- */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn label_roundtrip(row in 0usize..=25, column in 0usize..2000) {
        let seat = Seat::new(row, column).unwrap();
        let back: Seat = seat.to_string().parse().unwrap();
        prop_assert_eq!(back, seat);
    }

    /// Разбор произвольной строки не паникует никогда.
    #[test]
    fn parsing_arbitrary_input_never_panics(label in "\\PC{0,8}") {
        let _ = label.parse::<Seat>();
    }
}

/* ---------- allocation ---------- */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// На пустом зале подбор дает ровно count различных мест в границах
    /// либо честную ошибку ёмкости - короткого списка не бывает.
    #[test]
    fn center_selection_is_exact_distinct_in_bounds(
        (rows, seats_per_row) in arb_dims(),
        count in 1usize..30,
        starting_row_seed in 0usize..26,
    ) {
        let controller = controller(rows, seats_per_row);
        let starting_row = starting_row_seed % rows;
        let total = rows * seats_per_row;

        match controller.select_seats_from_center(count, starting_row) {
            Ok(selected) => {
                prop_assert!(count <= total);
                prop_assert_eq!(selected.len(), count);
                let unique: HashSet<Seat> = selected.iter().copied().collect();
                prop_assert_eq!(unique.len(), count);
                prop_assert!(selected
                    .iter()
                    .all(|seat| seat.row() < rows && seat.column() < seats_per_row));
            }
            Err(BookingError::InsufficientCapacity { requested, available }) => {
                prop_assert!(count > total);
                prop_assert_eq!(requested, count);
                prop_assert_eq!(available, total);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Небольшой запрос остается в стартовом ряду и прижат к центру:
    /// не дальше ceil(count/2) колонок от него.
    #[test]
    fn small_requests_cluster_at_row_center(
        (rows, seats_per_row) in arb_dims(),
        count_seed in 1usize..51,
    ) {
        let count = count_seed.min(seats_per_row);
        let controller = controller(rows, seats_per_row);
        let selected = controller.select_seats_from_center(count, DEFAULT_STARTING_ROW).unwrap();

        let center = seats_per_row / 2;
        let radius = (count + 1) / 2;
        prop_assert!(selected.iter().all(|seat| seat.row() == DEFAULT_STARTING_ROW));
        for seat in &selected {
            let distance = seat.column().abs_diff(center);
            prop_assert!(
                distance <= radius,
                "seat {} is {} columns from center {}, radius {}",
                seat, distance, center, radius
            );
        }
    }

    /// Запрос на полный ряд закрывает ряд целиком, без дыр.
    #[test]
    fn full_row_request_covers_the_row((rows, seats_per_row) in arb_dims()) {
        let controller = controller(rows, seats_per_row);
        let selected = controller
            .select_seats_from_center(seats_per_row, DEFAULT_STARTING_ROW)
            .unwrap();

        prop_assert!(selected.iter().all(|seat| seat.row() == DEFAULT_STARTING_ROW));
        let columns: HashSet<usize> = selected.iter().map(Seat::column).collect();
        prop_assert_eq!(columns.len(), seats_per_row);
    }

    /// Любой рисунок занятости: поиск завершает работу и либо находит
    /// ровно count свободных мест, либо сообщает точный остаток.
    #[test]
    fn allocation_is_total_under_any_occupancy(
        (rows, seats_per_row, taken) in arb_occupied_hall(),
        count in 1usize..40,
        starting_row_seed in 0usize..26,
    ) {
        let controller = with_occupancy(rows, seats_per_row, &taken);
        let available = controller.seats_available();
        let starting_row = starting_row_seed % rows;

        match controller.select_seats_from_center(count, starting_row) {
            Ok(selected) => {
                prop_assert!(count <= available);
                prop_assert_eq!(selected.len(), count);
                let unique: HashSet<Seat> = selected.iter().copied().collect();
                prop_assert_eq!(unique.len(), count);
                prop_assert!(selected.iter().all(|seat| !controller.is_seat_booked(*seat)));
            }
            Err(BookingError::InsufficientCapacity { requested, available: reported }) => {
                prop_assert!(count > available);
                prop_assert_eq!(requested, count);
                prop_assert_eq!(reported, available);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// То же для подбора от якоря; свободный якорь в незаполненном ряду
    /// всегда открывает список.
    #[test]
    fn anchored_allocation_is_total(
        (rows, seats_per_row, taken) in arb_occupied_hall(),
        count in 1usize..40,
        row_seed in 0usize..26,
        column_seed in 0usize..50,
    ) {
        let controller = with_occupancy(rows, seats_per_row, &taken);
        let available = controller.seats_available();
        let anchor = Seat::new(row_seed % rows, column_seed % seats_per_row).unwrap();
        let anchor_row_full = (0..seats_per_row)
            .all(|column| controller.is_seat_booked(Seat::new(anchor.row(), column).unwrap()));

        match controller.select_seats_from_anchor(count, &anchor.to_string()) {
            Ok(selected) => {
                prop_assert!(count <= available);
                prop_assert_eq!(selected.len(), count);
                let unique: HashSet<Seat> = selected.iter().copied().collect();
                prop_assert_eq!(unique.len(), count);
                prop_assert!(selected.iter().all(|seat| !controller.is_seat_booked(*seat)));
                if !controller.is_seat_booked(anchor) && !anchor_row_full {
                    prop_assert_eq!(selected[0], anchor);
                }
            }
            Err(BookingError::InsufficientCapacity { requested, available: reported }) => {
                prop_assert!(count > available);
                prop_assert_eq!(requested, count);
                prop_assert_eq!(reported, available);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// Подтверждённые места никогда не предлагаются снова.
    #[test]
    fn committed_seats_are_never_reproposed(
        (rows, seats_per_row) in arb_dims(),
        batches in prop::collection::vec(1usize..6, 1..6),
    ) {
        let mut controller = controller(rows, seats_per_row);
        let mut committed: HashSet<Seat> = HashSet::new();

        for batch in batches {
            let Ok(selected) = controller.select_seats_from_center(batch, DEFAULT_STARTING_ROW)
            else {
                break;
            };
            for seat in &selected {
                prop_assert!(!committed.contains(seat), "seat {} proposed twice", seat);
            }
            let booking = controller.new_booking().with_seats(selected.clone());
            controller.save_booking(booking).unwrap();
            committed.extend(selected);
        }
    }

    /// Рендер детерминирован, и счет символов сходится с занятостью.
    #[test]
    fn renderer_matches_occupancy((rows, seats_per_row, taken) in arb_occupied_hall()) {
        let controller = with_occupancy(rows, seats_per_row, &taken);
        let display = SeatingDisplay::for_screening(controller.screening());

        let output = display.render(&[]);
        prop_assert_eq!(output.matches('x').count(), taken.len() + 1);
        prop_assert_eq!(
            output.matches('.').count(),
            rows * seats_per_row - taken.len() + 1
        );
        prop_assert_eq!(display.render(&[]), output);
    }
}
