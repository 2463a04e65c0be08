// Observer Pattern - a subject broadcasting state changes to subscribers.
// The weather station holds shared observer handles and notifies each one,
// in registration order, every time its reading changes.

use std::rc::Rc;

pub trait Observer {
    fn update(&self, temperature: f64);
}

/// Prints each reading it receives, tagged with the display's name.
pub struct TemperatureDisplay {
    name: String,
}

impl TemperatureDisplay {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for TemperatureDisplay {
    fn update(&self, temperature: f64) {
        println!("{} display: {}°C", self.name, temperature);
    }
}

/// The subject: owns the subscriber list and the current reading.
pub struct WeatherStation {
    temperature: f64,
    observers: Vec<Rc<dyn Observer>>,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self {
            temperature: 0.0,
            observers: Vec::new(),
        }
    }

    /// Adds a subscriber. Duplicates are allowed: registering the same
    /// handle twice means it is notified twice per broadcast.
    pub fn register(&mut self, observer: Rc<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Removes the first entry holding the same allocation as `observer`.
    /// No-op if the handle was never registered.
    pub fn unregister(&mut self, observer: &Rc<dyn Observer>) {
        if let Some(pos) = self
            .observers
            .iter()
            .position(|o| Rc::ptr_eq(o, observer))
        {
            self.observers.remove(pos);
        }
    }

    /// Stores the new reading and synchronously notifies every current
    /// subscriber with it, in registration order.
    pub fn set_value(&mut self, temperature: f64) {
        self.temperature = temperature;
        for observer in &self.observers {
            observer.update(self.temperature);
        }
    }

    pub fn value(&self) -> f64 {
        self.temperature
    }
}

impl Default for WeatherStation {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo() {
    let mut station = WeatherStation::new();

    let main_display: Rc<dyn Observer> = Rc::new(TemperatureDisplay::new("Main"));
    let hallway_display: Rc<dyn Observer> = Rc::new(TemperatureDisplay::new("Hallway"));

    station.register(Rc::clone(&main_display));
    station.register(Rc::clone(&hallway_display));

    station.set_value(25.5);
    station.set_value(26.0);

    println!("Unregistering the Hallway display...");
    station.unregister(&hallway_display);
    station.set_value(24.0);
}
