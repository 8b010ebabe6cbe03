use xtable::{Field, RowIdentity, Schema};

#[derive(Debug, Clone)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub email: String,
}

impl RowIdentity for User {
    fn identity_hash(&self) -> u64 {
        xxhash_rust::xxh3::xxh3_64(self.email.as_bytes())
    }
}

const USERS: &[(&str, u32, &str)] = &[
    ("Hank", 59, "Hank@example.com"),
    ("Oscar", 21, "Oscar@sample.net"),
    ("Quincy", 59, "Quincy@demo.co"),
    ("Rita", 62, "Rita@example.com"),
    ("Zane", 31, "Zane@test.org"),
    ("Bob", 36, "Bob@example.com"),
    ("Ivy", 66, "Ivy@sample.net"),
    ("Jack", 25, "Jack@sample.net"),
    ("Mona", 23, "Mona@example.com"),
    ("Grace", 50, "Grace@test.org"),
    ("Karen", 60, "Karen@sample.net"),
    ("Nancy", 51, "Nancy@example.com"),
    ("Bob", 28, "Bob@myemail.com"),
    ("Charlie", 36, "Charlie@test.org"),
    ("Diana", 32, "Diana@example.com"),
    ("Quincy", 37, "Quincy@sample.net"),
    ("Charlie", 24, "Charlie@sample.net"),
    ("Nancy", 33, "Nancy@demo.co"),
    ("Oscar", 57, "Oscar@example.com"),
    ("Nancy", 58, "Nancy@myemail.com"),
    ("Oscar", 40, "Oscar@myemail.com"),
    ("Yara", 59, "Yara@test.org"),
    ("Yara", 27, "Yara@sample.net"),
    ("Zane", 35, "Zane@demo.co"),
    ("Victor", 61, "Victor@test.org"),
    ("Wendy", 41, "Wendy@sample.net"),
    ("Frank", 31, "Frank@test.org"),
    ("Eve", 20, "Eve@demo.co"),
    ("Mona", 51, "Mona@demo.co"),
    ("Wendy", 22, "Wendy@myemail.com"),
];

pub fn users() -> Vec<User> {
    USERS
        .iter()
        .map(|(name, age, email)| User {
            name: name.to_string(),
            age: *age,
            email: email.to_string(),
        })
        .collect()
}

pub fn schema() -> Schema<User> {
    Schema::new()
        .field(Field::new("Name", |u: &User| u.name.clone()).title("User Name"))
        .field(Field::new("Age", |u: &User| u.age.to_string()))
        .field(Field::new("Email", |u: &User| u.email.clone()).title("E-mail Address"))
}
