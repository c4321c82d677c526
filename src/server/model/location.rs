use crate::model::reference::LocationDto;

/// Physical site owning groups and users.
///
/// Two locations are equal when their names are equal; location names are unique.
#[derive(Debug, Clone)]
pub struct Location {
    pub id: i32,
    pub name: String,
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Location {}

impl Location {
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            id: self.id,
            name: self.name,
        }
    }
}
