//! Startup sample data.

use crate::model::person::ValidationResult;
use crate::model::student::Student;
use crate::model::teacher::Teacher;
use crate::repo::student_repo::StudentRepository;
use crate::service::student_service::StudentService;
use log::info;

/// Inserts the three sample students (ids 101, 102, 103).
///
/// Also builds the sample `Teacher`, which is returned to the caller and
/// never stored. Ids that already exist are left untouched.
pub fn seed_sample_data<R: StudentRepository>(
    service: &mut StudentService<R>,
) -> ValidationResult<Teacher> {
    let samples = [
        Student::new(101, "Asha", "B.Sc CS", vec![88, 92, 79])?,
        Student::new(102, "Vikram", "BCA", vec![67, 73, 71])?,
        Student::new(103, "Nisha", "B.Tech IT", vec![95, 91, 97])?,
    ];

    let mut inserted = 0usize;
    for student in samples {
        if service.add_student(student) {
            inserted += 1;
        }
    }

    let teacher = Teacher::new(201, "Meera", "Computer Science")?;
    info!("event=seed module=service status=ok inserted={inserted}");
    Ok(teacher)
}
