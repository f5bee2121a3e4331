use std::sync::Arc;

use bandservice_core::keys::{tag_prefix, EntityTag};
use bandservice_core::music::{
    apply_person_update, build_person, natural_key, require_sort_key, validate_create_person,
    CreatePersonRequest, Person, ServiceError,
};
use bandservice_core::storage::{Record, Repository};

use super::{new_id, EntityTable};

/// Person operations over the `PERSON` partition.
pub struct PersonService {
    table: EntityTable<Person>,
}

impl PersonService {
    pub fn new(repository: Arc<dyn Repository<Person>>, tag: EntityTag) -> Self {
        Self {
            table: EntityTable::new(repository, tag),
        }
    }

    pub async fn get_by_id(&self, sort_key: &str) -> Result<Person, ServiceError> {
        self.table.get(sort_key).await
    }

    pub async fn get_all(&self) -> Result<Vec<Person>, ServiceError> {
        self.table.list(tag_prefix(self.table.tag())).await
    }

    /// Creates a person under `PERSON#<uuid>`. Email is required and unique.
    pub async fn create(&self, request: CreatePersonRequest) -> Result<Person, ServiceError> {
        let email = validate_create_person(&request)?;
        self.ensure_email_available(email).await?;

        let person = build_person(self.table.tag(), &new_id(), request);
        let person = self.table.insert(person).await?;

        tracing::info!(sort_key = %person.sort_key, "Created person");
        Ok(person)
    }

    pub async fn update(&self, update: Person) -> Result<Person, ServiceError> {
        require_sort_key(Person::ENTITY_TYPE, &update.sort_key)?;

        let mut person = self.table.get(&update.sort_key).await?;
        apply_person_update(&mut person, update);
        let person = self.table.save(person).await?;

        tracing::info!(sort_key = %person.sort_key, "Updated person");
        Ok(person)
    }

    pub async fn delete(&self, sort_key: &str) -> Result<Person, ServiceError> {
        let person = self.table.remove(sort_key).await?;
        tracing::info!(sort_key = %person.sort_key, "Deleted person");
        Ok(person)
    }

    /// Rejects an email that is already taken.
    ///
    /// Checks the natural key `PERSON#<email>`, which only records written
    /// by other producers occupy, then scans the partition for the same
    /// email. Every create pays one point lookup plus a full partition query.
    async fn ensure_email_available(&self, email: &str) -> Result<(), ServiceError> {
        let key = natural_key(self.table.tag(), email);
        let taken = self.table.find(&key).await?.is_some()
            || self
                .get_all()
                .await?
                .iter()
                .any(|person| person.fields.email.as_deref().map(str::trim) == Some(email));

        if taken {
            tracing::warn!(email, "Person email already in use");
            return Err(ServiceError::DuplicateKey {
                entity_type: Person::ENTITY_TYPE,
                sort_key: key,
            });
        }
        Ok(())
    }
}
