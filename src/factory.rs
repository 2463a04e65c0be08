// Factory Pattern - mapping a string key to a concrete shape. The key set
// is closed: matching happens against an explicit lowercase enumeration
// with a default arm, never open-ended string dispatch.

pub trait Shape {
    /// Prints the shape's display line and returns it.
    fn draw(&self) -> String;
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self) -> String {
        let line = "Drawing a circle".to_string();
        println!("{}", line);
        line
    }
}

pub struct Square;

impl Shape for Square {
    fn draw(&self) -> String {
        let line = "Drawing a square".to_string();
        println!("{}", line);
        line
    }
}

/// Case-insensitive lookup over the closed set {"circle", "square"}.
/// Absent, empty, or unrecognized keys yield `None` rather than a crash.
pub fn create(kind: Option<&str>) -> Option<Box<dyn Shape>> {
    match kind?.to_ascii_lowercase().as_str() {
        "circle" => Some(Box::new(Circle)),
        "square" => Some(Box::new(Square)),
        _ => None,
    }
}

pub fn demo() {
    for kind in [Some("circle"), Some("SQUARE"), Some("triangle"), None] {
        match create(kind) {
            Some(shape) => {
                shape.draw();
            }
            None => println!("No shape for key {:?}", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_lookup_is_case_insensitive() {
        for key in ["circle", "CIRCLE", "Circle", "cIrClE"] {
            let shape = create(Some(key)).expect("circle key should resolve");
            assert_eq!(shape.draw(), "Drawing a circle");
        }

        for key in ["square", "SQUARE", "Square"] {
            let shape = create(Some(key)).expect("square key should resolve");
            assert_eq!(shape.draw(), "Drawing a square");
        }
    }

    #[test]
    fn unrecognized_keys_yield_no_product() {
        assert!(create(Some("triangle")).is_none());
        assert!(create(Some("circ")).is_none());
        assert!(create(Some(" circle ")).is_none());
    }

    #[test]
    fn absent_and_empty_keys_yield_no_product() {
        assert!(create(None).is_none());
        assert!(create(Some("")).is_none());
    }
}
