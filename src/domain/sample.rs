//! Built-in sample organization, used when no chart file is given.

use crate::domain::entities::{Employee, EmployeeId};

fn employee(id: EmployeeId, name: &str, subordinates: Vec<Employee>) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        subordinates,
    }
}

/// Fifteen employees rooted at the CEO (id 1).
pub fn sample_chart() -> Employee {
    employee(
        1,
        "Mark Zuckerberg",
        vec![
            employee(
                2,
                "Sarah Donald",
                vec![employee(
                    6,
                    "Cassandra Reynolds",
                    vec![
                        employee(11, "Mary Blue", vec![]),
                        employee(
                            12,
                            "Bob Saget",
                            vec![employee(
                                14,
                                "Tina Teff",
                                vec![employee(15, "Will Turner", vec![])],
                            )],
                        ),
                    ],
                )],
            ),
            employee(
                3,
                "Tyler Simpson",
                vec![
                    employee(7, "Harry Tobs", vec![employee(13, "Thomas Brown", vec![])]),
                    employee(8, "George Carrey", vec![]),
                    employee(9, "Gary Styles", vec![]),
                ],
            ),
            employee(4, "Bruce Willis", vec![]),
            employee(
                5,
                "Georgina Flangy",
                vec![employee(10, "Sophie Turner", vec![])],
            ),
        ],
    )
}
