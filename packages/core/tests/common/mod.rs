//! Subject fixtures shared by the integration tests

#![allow(dead_code)]

use std::sync::Arc;

use chainrec_core::prelude::*;

#[derive(Debug)]
pub struct Address {
    pub city: String,
    pub zip: i64,
}

impl Address {
    pub fn new(city: &str, zip: i64) -> Self {
        Self {
            city: city.to_string(),
            zip,
        }
    }
}

impl Subject for Address {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("Address")
            .getter("getCity", TypeRef::Str)
            .getter("getZip", TypeRef::Int)
    }

    fn type_name(&self) -> &str {
        "Address"
    }

    fn invoke(&self, call: &MethodCall<'_>) -> Result<Value, InvokeError> {
        match call.method() {
            "getCity" => Ok(self.city.as_str().into()),
            "getZip" => Ok(self.zip.into()),
            _ => Err(call.unknown(self.type_name())),
        }
    }

    fn sort_key(&self) -> Option<Value> {
        Some(self.city.as_str().into())
    }
}

/// Sealed value type: placeholders never stand in for it mid-chain
#[derive(Debug)]
pub struct Money {
    pub cents: i64,
}

impl Subject for Money {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::sealed("Money").getter("getCents", TypeRef::Int)
    }

    fn type_name(&self) -> &str {
        "Money"
    }

    fn invoke(&self, call: &MethodCall<'_>) -> Result<Value, InvokeError> {
        match call.method() {
            "getCents" => Ok(self.cents.into()),
            _ => Err(call.unknown(self.type_name())),
        }
    }
}

#[derive(Debug)]
pub struct Person {
    pub name: String,
    pub age: i64,
    pub address: Value,
    pub friend: Value,
    pub salary: Value,
}

impl Person {
    pub fn new(name: &str, age: i64) -> Self {
        Self {
            name: name.to_string(),
            age,
            address: Value::Null,
            friend: Value::Null,
            salary: Value::Null,
        }
    }

    pub fn living_in(mut self, city: &str) -> Self {
        self.address = Value::object(Address::new(city, 0));
        self
    }

    pub fn with_friend(mut self, friend: Person) -> Self {
        self.friend = Value::object(friend);
        self
    }

    pub fn earning(mut self, cents: i64) -> Self {
        self.salary = Value::object(Money { cents });
        self
    }

    pub fn into_value(self) -> Value {
        Value::object(self)
    }
}

impl Subject for Person {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::new("Person")
            .getter("getName", TypeRef::Str)
            .getter("getAge", TypeRef::Int)
            .getter("isAdult", TypeRef::Bool)
            .getter("getAddress", TypeRef::named("Address"))
            .getter("getFriend", TypeRef::named("Person"))
            .getter("getSalary", TypeRef::named("Money"))
            .method("greet", [TypeRef::Str], TypeRef::Str)
            .getter("score", TypeRef::Int)
            .method("score", [TypeRef::Int], TypeRef::Int)
    }

    fn type_name(&self) -> &str {
        "Person"
    }

    fn invoke(&self, call: &MethodCall<'_>) -> Result<Value, InvokeError> {
        match (call.method(), call.args().len()) {
            ("getName", 0) => Ok(self.name.as_str().into()),
            ("getAge", 0) => Ok(self.age.into()),
            ("isAdult", 0) => Ok((self.age >= 18).into()),
            ("getAddress", 0) => Ok(self.address.clone()),
            ("getFriend", 0) => Ok(self.friend.clone()),
            ("getSalary", 0) => Ok(self.salary.clone()),
            ("greet", 1) => Ok(format!("{}, {}", call.str(0)?, self.name).into()),
            ("score", 0) => Ok(self.age.into()),
            ("score", 1) => Ok((self.age + call.int(0)?).into()),
            _ => Err(call.unknown(self.type_name())),
        }
    }

    fn sort_key(&self) -> Option<Value> {
        Some(self.age.into())
    }
}

/// Interface-like descriptor shared by [`Circle`] and [`Square`]
pub fn shape_descriptor() -> TypeDescriptor {
    TypeDescriptor::new("Shape")
        .getter("area", TypeRef::Float)
        .getter("getName", TypeRef::Str)
        .method("scaled", [TypeRef::Float], TypeRef::named("Shape"))
}

#[derive(Debug)]
pub struct Circle {
    pub radius: f64,
}

impl Subject for Circle {
    fn descriptor() -> TypeDescriptor {
        shape_descriptor()
    }

    fn type_name(&self) -> &str {
        "Circle"
    }

    fn invoke(&self, call: &MethodCall<'_>) -> Result<Value, InvokeError> {
        match call.method() {
            "area" => Ok((std::f64::consts::PI * self.radius * self.radius).into()),
            "getName" => Ok("circle".into()),
            "scaled" => Ok(Value::object(Circle {
                radius: self.radius * call.float(0)?,
            })),
            _ => Err(call.unknown(self.type_name())),
        }
    }
}

#[derive(Debug)]
pub struct Square {
    pub side: f64,
}

impl Subject for Square {
    fn descriptor() -> TypeDescriptor {
        shape_descriptor()
    }

    fn type_name(&self) -> &str {
        "Square"
    }

    fn invoke(&self, call: &MethodCall<'_>) -> Result<Value, InvokeError> {
        match call.method() {
            "area" => Ok((self.side * self.side).into()),
            "getName" => Ok("square".into()),
            "scaled" => Ok(Value::object(Square {
                side: self.side * call.float(0)?,
            })),
            _ => Err(call.unknown(self.type_name())),
        }
    }
}

/// Registered only by name, with a method Person never implements at runtime
pub fn robot_descriptor() -> TypeDescriptor {
    TypeDescriptor::new("Robot").getter("getSerial", TypeRef::Str)
}

pub struct Fixture {
    pub factory: Arc<PlaceholderFactory>,
    pub registry: ChainRegistry,
    pub stats: Arc<LambdaStats>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(LambdaConfig::default())
    }

    pub fn with_config(config: LambdaConfig) -> Self {
        let stats = Arc::new(LambdaStats::new());
        let mut factory = PlaceholderFactory::new(config.clone(), Arc::clone(&stats));
        factory
            .register::<Person>()
            .register::<Address>()
            .register::<Money>()
            .register_descriptor(shape_descriptor())
            .register_descriptor(robot_descriptor());
        let registry = ChainRegistry::new(&config, Arc::clone(&stats));

        Self {
            factory: Arc::new(factory),
            registry,
            stats,
        }
    }

    pub fn person(&self) -> Placeholder {
        self.factory
            .capture_type::<Person>(self.registry.id())
            .expect("Person capture should open in test")
    }

    pub fn shape(&self) -> Placeholder {
        self.factory
            .capture("Shape", self.registry.id())
            .expect("Shape capture should open in test")
    }

    /// Close `Person.<getters...>` in one go
    pub fn person_handle(&self, getters: &[&str]) -> ArgumentHandle {
        let mut current: Captured = self.person().into();
        for getter in getters {
            current = current.get(getter).expect("getter should record in test");
        }
        self.registry.close(current).expect("chain should close in test")
    }
}
