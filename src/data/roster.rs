//! The built-in employee roster.

use crate::models::{parse_date, Employee, RosterError};
use tracing::debug;

/// One literal row: first name, last name, gender, department, job title,
/// salary, hire date and optional termination date.
type RosterRow = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Option<&'static str>,
);

const ROSTER: &[RosterRow] = &[
    ("María", "Rodríguez", "F", "Contabilidad", "Asistente Contable", "700", "2021-04-01", None),
    ("Juan", "Gutierrez", "M", "Talento Humano", "Reclutador", "500", "2023-03-11", Some("2024-04-01")),
    ("José", "Albornoz", "M", "Contabilidad", "Asistente Contable", "800", "2020-08-15", Some("2023-05-01")),
    ("Julián", "Flores", "M", "Informática", "Soporte TI", "800", "2023-11-01", None),
    ("Camila", "Mendoza", "F", "Informática", "Desarrollador UI/UX", "1000", "2021-07-08", None),
    ("Camilo", "López", "M", "Contabilidad", "Supervisor Contable", "1500", "2020-04-11", None),
    ("Manuel", "Játiva", "M", "Contabilidad", "Asistente Contable", "850", "2023-06-03", None),
    ("Carlos", "Franco", "M", "Talento Humano", "Reclutador", "650", "2023-01-07", Some("2024-12-09")),
    ("Raúl", "Echeverría", "M", "Informática", "Infraestructura TI", "950", "2020-02-14", None),
    ("Estefanía", "Mendoza", "F", "Talento Humano", "Supervisora TH", "1600", "2021-09-21", None),
    ("Julie", "Flores", "F", "Informática", "Desarrollador", "1200", "2021-12-10", None),
    ("Melissa", "Morocho", "F", "Contabilidad", "Asistente Contable", "820", "2022-05-22", Some("2023-07-09")),
    ("Camila", "Mendez", "F", "Contabilidad", "Asistente Cuentas", "860", "2020-10-01", None),
    ("José", "Rodríguez", "M", "Informática", "Tester QA", "1100", "2021-10-01", None),
    ("Esteban", "Gutierrez", "M", "Talento Humano", "Reclutador", "700", "2023-04-01", None),
    ("María", "López", "F", "Contabilidad", "Asistente Contable", "840", "2020-02-20", Some("2024-07-15")),
    ("Cecilia", "Marín", "F", "Informática", "Supervisora TI", "2000", "2020-04-21", None),
    ("Edison", "Cáceres", "M", "Informática", "Desarrollador TI", "1300", "2023-07-07", None),
    ("María", "Silva", "F", "Contabilidad", "Asistente Contable", "900", "2021-11-15", Some("2022-08-09")),
];

/// Build the built-in roster.
///
/// Every literal is validated; the first malformed value aborts the load.
pub fn load_roster() -> Result<Vec<Employee>, RosterError> {
    let employees = ROSTER
        .iter()
        .map(build_employee)
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Loaded {} employees from the built-in roster", employees.len());
    Ok(employees)
}

fn build_employee(row: &RosterRow) -> Result<Employee, RosterError> {
    let (first, last, gender, department, title, salary, hired, terminated) = *row;

    let employee = Employee::new(
        first,
        last,
        gender.parse()?,
        department,
        title,
        salary.parse()?,
        parse_date(hired)?,
    );

    match terminated {
        Some(date) => employee.terminated_on(parse_date(date)?),
        None => Ok(employee),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_roster() {
        let employees = load_roster().unwrap();
        assert_eq!(employees.len(), 19);
        assert_eq!(employees.iter().filter(|e| e.is_active()).count(), 13);
        assert_eq!(employees[0].full_name(), "María Rodríguez");
    }

    #[test]
    fn test_terminated_rows_carry_their_date() {
        let employees = load_roster().unwrap();
        let juan = &employees[1];
        assert!(!juan.is_active());
        assert_eq!(juan.termination_date(), Some(parse_date("2024-04-01").unwrap()));
    }

    #[test]
    fn test_malformed_literal_is_rejected() {
        let row: RosterRow = (
            "Ana",
            "Pérez",
            "F",
            "Ventas",
            "Gerente",
            "1000",
            "2021-13-01",
            None,
        );
        assert!(matches!(
            build_employee(&row),
            Err(RosterError::InvalidDate { .. })
        ));

        let row: RosterRow = ("Ana", "Pérez", "F", "Ventas", "Gerente", "mil", "2021-01-01", None);
        assert_eq!(
            build_employee(&row),
            Err(RosterError::InvalidSalary("mil".to_string()))
        );
    }
}
