// Decorator Pattern - layering add-ons around a base beverage. Each
// decorator owns exactly one inner component and extends its description
// and cost; outer layers never drop what inner layers contributed.

pub trait Beverage {
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

pub struct BasicCoffee;

impl Beverage for BasicCoffee {
    fn description(&self) -> String {
        "Basic Coffee".to_string()
    }

    fn cost(&self) -> f64 {
        2.0
    }
}

pub struct Milk {
    inner: Box<dyn Beverage>,
}

impl Milk {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Milk {
    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.5
    }
}

pub struct Sugar {
    inner: Box<dyn Beverage>,
}

impl Sugar {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner }
    }
}

impl Beverage for Sugar {
    fn description(&self) -> String {
        format!("{}, Sugar", self.inner.description())
    }

    fn cost(&self) -> f64 {
        self.inner.cost() + 0.2
    }
}

pub fn demo() {
    let order: Box<dyn Beverage> =
        Box::new(Sugar::new(Box::new(Milk::new(Box::new(BasicCoffee)))));
    println!("Order: {} costs ${:.2}", order.description(), order.cost());

    // Same add-ons, opposite wrap order: description changes, cost doesn't.
    let reversed: Box<dyn Beverage> =
        Box::new(Milk::new(Box::new(Sugar::new(Box::new(BasicCoffee)))));
    println!(
        "Order: {} costs ${:.2}",
        reversed.description(),
        reversed.cost()
    );
}
