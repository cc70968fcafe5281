use std::io::Cursor;
use studentdb_core::{
    seed_sample_data, Console, InMemoryStudentRepository, Person, Student, StudentRepository,
    StudentService,
};

/// Runs the console over `input` and returns the final repository and output.
fn run_console(
    service: StudentService<InMemoryStudentRepository>,
    input: &str,
) -> (InMemoryStudentRepository, String) {
    run_console_bytes(service, input.as_bytes())
}

fn run_console_bytes(
    service: StudentService<InMemoryStudentRepository>,
    input: &[u8],
) -> (InMemoryStudentRepository, String) {
    let reader = Cursor::new(input.to_vec());
    let mut console = Console::new(reader, Vec::new(), service);
    console.run().unwrap();
    let (service, output) = console.into_parts();
    (service.into_repo(), String::from_utf8(output).unwrap())
}

fn empty_service() -> StudentService<InMemoryStudentRepository> {
    StudentService::new(InMemoryStudentRepository::new())
}

fn seeded_service() -> StudentService<InMemoryStudentRepository> {
    let mut service = empty_service();
    seed_sample_data(&mut service).unwrap();
    service
}

#[test]
fn exit_prints_banner_menu_and_goodbye() {
    let (_, out) = run_console(empty_service(), "0\n");

    assert!(out.starts_with("===== Student Database Management System =====\n"));
    assert!(out.contains(
        "\n1) Add new student\n2) View all student records\n3) Update existing record\n4) Delete record\n5) View a student by ID\n0) Exit\n"
    ));
    assert!(out.ends_with("Enter choice: Bye!\n"));
}

#[test]
fn end_of_input_stops_loop_quietly() {
    let (repo, out) = run_console(seeded_service(), "");

    assert_eq!(repo.len(), 3);
    assert!(out.ends_with("Enter choice: "));
    assert!(!out.contains("Bye!"));
}

#[test]
fn invalid_menu_choice_redraws_menu() {
    let (_, out) = run_console(empty_service(), "abc\n9\n0\n");

    assert_eq!(out.matches("Invalid choice. Try again.").count(), 2);
    assert_eq!(out.matches("0) Exit").count(), 3);
}

#[test]
fn add_flow_creates_student() {
    let input = "1\nx\n101\nAsha\nB.Sc CS\n88\n200\n92\n79\ndone\n0\n";
    let (repo, out) = run_console(empty_service(), input);

    assert!(out.contains("Please enter a valid integer."));
    assert!(out.contains("Mark must be between 0 and 100."));
    assert!(out.contains("Mark #4: "));
    assert!(out.contains(
        "Added: Student{id=101, name='Asha', course='B.Sc CS', avg=86.33, grade=A}"
    ));
    assert_eq!(
        repo.get_by_id(101),
        Some(Student::new(101, "Asha", "B.Sc CS", vec![88, 92, 79]).unwrap())
    );
}

#[test]
fn add_flow_reports_duplicate_id() {
    let input = "1\n101\nSomeone\nBCA\n50\ndone\n0\n";
    let (repo, out) = run_console(seeded_service(), input);

    assert!(out.contains("A student with this ID already exists."));
    assert_eq!(repo.len(), 3);
    assert_eq!(repo.get_by_id(101).unwrap().name(), "Asha");
}

#[test]
fn add_flow_reports_validation_error_without_creating() {
    let input = "1\n0\nNobody\nBCA\n50\ndone\n1\n7\n   \nBCA\n60\ndone\n0\n";
    let (repo, out) = run_console(empty_service(), input);

    assert!(out.contains("Error: ID must be positive"));
    assert!(out.contains("Error: Name cannot be empty"));
    assert!(repo.is_empty());
}

#[test]
fn view_all_on_empty_repository() {
    let (_, out) = run_console(empty_service(), "2\n0\n");
    assert!(out.contains("No records found."));
}

#[test]
fn view_all_renders_every_record_with_marks() {
    let (_, out) = run_console(seeded_service(), "2\n0\n");

    assert!(out.contains("-- All Students --\n[Student] ID: 101, Name: Asha\n  Course: B.Sc CS\n  Marks: [88, 92, 79]\n  Average: 86.33, Grade: A\n\n[Student] ID: 102"));
    let asha = out.find("ID: 101").unwrap();
    let vikram = out.find("ID: 102").unwrap();
    let nisha = out.find("ID: 103").unwrap();
    assert!(asha < vikram && vikram < nisha);
    assert!(!out.contains("[Teacher]"));
}

#[test]
fn view_one_found_and_missing() {
    let (_, out) = run_console(seeded_service(), "5\n102\n5\n999\n0\n");

    assert!(out.contains("[Student] ID: 102, Name: Vikram\n  Course: BCA\n  Marks: [67, 73, 71]\n  Average: 70.33, Grade: B\n"));
    assert!(out.contains("No student with ID 999"));
}

#[test]
fn delete_flow_found_and_missing() {
    let (repo, out) = run_console(seeded_service(), "4\n102\n4\n102\n0\n");

    assert!(out.contains("Deleted student with ID 102"));
    assert!(out.contains("No student with ID 102"));
    let ids: Vec<i32> = repo.get_all().iter().map(Person::id).collect();
    assert_eq!(ids, vec![101, 103]);
}

#[test]
fn update_flow_missing_id_returns_to_menu() {
    let (repo, out) = run_console(seeded_service(), "3\n999\n0\n");

    assert!(out.contains("No student with ID 999"));
    assert!(!out.contains("New name"));
    assert_eq!(repo.len(), 3);
}

#[test]
fn update_flow_keeps_blank_fields() {
    let (repo, out) = run_console(seeded_service(), "3\n101\n\n  \nn\n0\n");

    assert!(out.contains("Editing: Student{id=101, name='Asha'"));
    assert!(out.contains("Updated: Student{id=101, name='Asha', course='B.Sc CS', avg=86.33, grade=A}"));
    assert_eq!(
        repo.get_by_id(101),
        Some(Student::new(101, "Asha", "B.Sc CS", vec![88, 92, 79]).unwrap())
    );
}

#[test]
fn update_flow_replaces_name_course_and_marks() {
    let input = "3\n102\n Vikram S \nMCA\nY\nabc\n90\n95\ndone\n0\n";
    let (repo, out) = run_console(seeded_service(), input);

    assert!(out.contains("Enter a number or 'done'."));
    assert!(out.contains(
        "Updated: Student{id=102, name='Vikram S', course='MCA', avg=92.50, grade=A+}"
    ));
    let updated = repo.get_by_id(102).unwrap();
    assert_eq!(updated.name(), "Vikram S");
    assert_eq!(updated.course(), "MCA");
    assert_eq!(updated.marks(), &[90, 95]);
    let ids: Vec<i32> = repo.get_all().iter().map(Person::id).collect();
    assert_eq!(ids, vec![101, 102, 103]);
}

#[test]
fn update_flow_aborted_by_closed_input_commits_nothing() {
    let (repo, out) = run_console(seeded_service(), "3\n103\nRenamed\n");

    assert!(!out.contains("Updated:"));
    assert_eq!(repo.get_by_id(103).unwrap().name(), "Nisha");
}

#[test]
fn non_utf8_input_does_not_end_session() {
    let input = b"1\n104\nJos\xe9\nBCA\n70\ndone\n\xff\xfe\n0\n";
    let (repo, out) = run_console_bytes(seeded_service(), input);

    assert!(out.contains("Added: Student{id=104, name='Jos\u{fffd}', course='BCA'"));
    assert!(out.contains("Invalid choice. Try again."));
    assert!(out.ends_with("Bye!\n"));
    assert_eq!(repo.get_by_id(104).unwrap().name(), "Jos\u{fffd}");
}
