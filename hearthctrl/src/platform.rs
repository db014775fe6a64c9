use hearthcore::{
    ac::{
        Agent,
        Group,
        Groups,
    },
    category::Categories,
    coating::{
        Coating,
        CoatingFields,
    },
    item::{
        Item,
        ItemFields,
    },
    location::{
        Location,
        Locations,
    },
    platform::InventoryPlatform,
    profile::UserProfile,
    rid::Rid,
    room::Room,
    task::{
        TargetKind,
        Task,
        TaskTarget,
        Tasks,
    },
};
use std::sync::Arc;

use crate::{
    detail::{
        Dashboard,
        ItemDetail,
        LocationDetail,
        RoomDetail,
    },
    error::Error,
};

#[derive(Default)]
pub struct Builder {
    inventory_platform: Option<Box<dyn InventoryPlatform>>,
}

pub struct Platform {
    inventory_platform: Box<dyn InventoryPlatform>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inventory_platform(
        mut self,
        val: impl InventoryPlatform + 'static,
    ) -> Self {
        self.inventory_platform = Some(Box::new(val));
        self
    }

    pub fn build(self) -> Arc<Platform> {
        Arc::new(Platform {
            inventory_platform: self.inventory_platform
                .expect("missing required argument inventory_platform"),
        })
    }
}

fn require_user(agent: &Agent) -> Result<&str, Error> {
    agent.user_id().ok_or(Error::Anonymous)
}

fn require_name(name: &str) -> Result<&str, Error> {
    let name = name.trim();
    if name.is_empty() {
        Err(Error::Validation("a name is required".to_string()))
    } else {
        Ok(name)
    }
}

impl Platform {
    pub fn url(&self) -> &str {
        self.inventory_platform.url()
    }
}

// Profiles and groups.
impl Platform {
    pub async fn set_profile(
        &self,
        agent: &Agent,
        avatar: Option<&str>,
    ) -> Result<(), Error> {
        let user_id = require_user(agent)?;
        Ok(self.inventory_platform.set_profile(user_id, avatar).await?)
    }

    pub async fn get_profile(
        &self,
        user_id: &str,
    ) -> Result<Option<UserProfile>, Error> {
        Ok(self.inventory_platform.get_profile(user_id).await?)
    }

    pub async fn create_group(
        &self,
        name: &str,
    ) -> Result<Rid, Error> {
        let name = require_name(name)?;
        Ok(self.inventory_platform.add_group(name).await?)
    }

    pub async fn get_group(
        &self,
        id: &Rid,
    ) -> Result<Group, Error> {
        Ok(self.inventory_platform.get_group_by_id(id).await?)
    }

    pub async fn add_group_member(
        &self,
        group_id: &Rid,
        user_id: &str,
    ) -> Result<bool, Error> {
        Ok(self.inventory_platform
            .add_group_member(group_id, user_id)
            .await?)
    }

    pub async fn remove_group_member(
        &self,
        group_id: &Rid,
        user_id: &str,
    ) -> Result<bool, Error> {
        Ok(self.inventory_platform
            .remove_group_member(group_id, user_id)
            .await?)
    }

    pub async fn list_groups_for_agent(
        &self,
        agent: &Agent,
    ) -> Result<Groups, Error> {
        match agent.user_id() {
            Some(user_id) => Ok(self.inventory_platform
                .list_groups_for_user(user_id)
                .await?),
            None => Ok(Groups::default()),
        }
    }
}

// Locations.
impl Platform {
    pub async fn create_location(
        &self,
        agent: &Agent,
        name: &str,
        address: &str,
        image: Option<&str>,
    ) -> Result<Rid, Error> {
        let owner = require_user(agent)?;
        let name = require_name(name)?;
        Ok(self.inventory_platform
            .add_location(owner, name, address, image)
            .await?)
    }

    pub async fn list_locations(
        &self,
        agent: &Agent,
    ) -> Result<Locations, Error> {
        Ok(self.inventory_platform.list_locations_for_agent(agent).await?)
    }

    /// Resolve a location only when the agent owns it directly.  A
    /// location shared through a group is reported as not found here;
    /// use `get_location_shared` for the listing-consistent semantics.
    pub async fn get_location(
        &self,
        agent: &Agent,
        id: &Rid,
    ) -> Result<Location, Error> {
        let location = self.inventory_platform.get_location_by_id(id).await?;
        if agent.user_id() == Some(location.owner.as_str()) {
            Ok(location)
        } else {
            Err(Error::NotFound)
        }
    }

    /// Resolve a location the agent owns or has shared through any of
    /// its groups, matching what `list_locations` returns.
    pub async fn get_location_shared(
        &self,
        agent: &Agent,
        id: &Rid,
    ) -> Result<Location, Error> {
        let location = self.inventory_platform.get_location_by_id(id).await?;
        if agent.user_id() == Some(location.owner.as_str()) {
            return Ok(location);
        }
        let accessible = self.inventory_platform
            .list_locations_for_agent(agent)
            .await?;
        if accessible.iter().any(|l| l.id == location.id) {
            Ok(location)
        } else {
            Err(Error::NotFound)
        }
    }

    pub async fn update_location(
        &self,
        agent: &Agent,
        id: &Rid,
        name: &str,
        address: &str,
        image: Option<&str>,
    ) -> Result<bool, Error> {
        self.get_location(agent, id).await?;
        let name = require_name(name)?;
        Ok(self.inventory_platform
            .update_location(id, name, address, image)
            .await?)
    }

    pub async fn delete_location(
        &self,
        agent: &Agent,
        id: &Rid,
    ) -> Result<bool, Error> {
        self.get_location(agent, id).await?;
        Ok(self.inventory_platform.delete_location(id).await?)
    }

    /// Only the direct owner may offer a location to a group.
    pub async fn share_location(
        &self,
        agent: &Agent,
        location_id: &Rid,
        group_id: &Rid,
    ) -> Result<bool, Error> {
        self.get_location(agent, location_id).await?;
        Ok(self.inventory_platform
            .share_location_with_group(location_id, group_id)
            .await?)
    }

    pub async fn location_detail(
        &self,
        agent: &Agent,
        id: &Rid,
    ) -> Result<LocationDetail, Error> {
        let location = self.get_location(agent, id).await?;
        let rooms = self.inventory_platform
            .list_rooms_for_location(id)
            .await?;
        let coatings = self.inventory_platform
            .list_coatings_for_location(id)
            .await?;
        let tasks = self.inventory_platform
            .list_tasks_for_target(TargetKind::Location, id)
            .await?;
        Ok(LocationDetail { location, rooms, coatings, tasks })
    }
}

// Rooms.
impl Platform {
    pub async fn create_room(
        &self,
        agent: &Agent,
        location_id: &Rid,
        name: &str,
        description: Option<&str>,
        size: Option<f64>,
    ) -> Result<Rid, Error> {
        self.get_location(agent, location_id).await?;
        let name = require_name(name)?;
        Ok(self.inventory_platform
            .add_room(location_id, name, description, size)
            .await?)
    }

    /// Room access follows ownership of its location.
    pub async fn get_room(
        &self,
        agent: &Agent,
        id: &Rid,
    ) -> Result<Room, Error> {
        let room = self.inventory_platform.get_room_by_id(id).await?;
        self.get_location(agent, &room.location_id).await?;
        Ok(room)
    }

    pub async fn update_room(
        &self,
        agent: &Agent,
        id: &Rid,
        name: &str,
        description: Option<&str>,
        size: Option<f64>,
    ) -> Result<bool, Error> {
        self.get_room(agent, id).await?;
        let name = require_name(name)?;
        Ok(self.inventory_platform
            .update_room(id, name, description, size)
            .await?)
    }

    pub async fn delete_room(
        &self,
        agent: &Agent,
        id: &Rid,
    ) -> Result<bool, Error> {
        self.get_room(agent, id).await?;
        Ok(self.inventory_platform.delete_room(id).await?)
    }

    pub async fn add_room_photo(
        &self,
        agent: &Agent,
        room_id: &Rid,
        image: &str,
        caption: Option<&str>,
        taken_on: Option<&str>,
    ) -> Result<Rid, Error> {
        self.get_room(agent, room_id).await?;
        Ok(self.inventory_platform
            .add_room_photo(room_id, image, caption, taken_on)
            .await?)
    }

    pub async fn room_detail(
        &self,
        agent: &Agent,
        id: &Rid,
    ) -> Result<RoomDetail, Error> {
        let room = self.get_room(agent, id).await?;
        let items = self.inventory_platform
            .list_items_for_room(id)
            .await?;
        let photos = self.inventory_platform
            .list_photos_for_room(id)
            .await?;
        let coatings = self.inventory_platform
            .list_coatings_for_room(id)
            .await?;
        let tasks = self.inventory_platform
            .list_tasks_for_target(TargetKind::Room, id)
            .await?;
        Ok(RoomDetail { room, items, photos, coatings, tasks })
    }
}

// Items.
impl Platform {
    pub async fn create_item(
        &self,
        agent: &Agent,
        location_id: &Rid,
        room_id: Option<&Rid>,
        fields: ItemFields<'_>,
    ) -> Result<Rid, Error> {
        let owner = require_user(agent)?;
        self.get_location(agent, location_id).await?;
        if let Some(room_id) = room_id {
            let room = self.inventory_platform.get_room_by_id(room_id).await?;
            if &room.location_id != location_id {
                return Err(Error::Validation(
                    "room does not belong to that location".to_string()));
            }
        }
        require_name(fields.name)?;
        Ok(self.inventory_platform
            .add_item(owner, location_id, room_id, fields)
            .await?)
    }

    /// Resolve an item by id with no ownership restriction.  This
    /// mirrors how the rest of the stack currently consumes items;
    /// `get_item_checked` is the restricted form.
    pub async fn get_item(
        &self,
        id: &Rid,
    ) -> Result<Item, Error> {
        Ok(self.inventory_platform.get_item_by_id(id).await?)
    }

    pub async fn get_item_checked(
        &self,
        agent: &Agent,
        id: &Rid,
    ) -> Result<Item, Error> {
        let item = self.inventory_platform.get_item_by_id(id).await?;
        if agent.user_id() == Some(item.owner.as_str()) {
            Ok(item)
        } else {
            Err(Error::NotFound)
        }
    }

    pub async fn update_item(
        &self,
        agent: &Agent,
        id: &Rid,
        fields: ItemFields<'_>,
    ) -> Result<bool, Error> {
        self.get_item_checked(agent, id).await?;
        require_name(fields.name)?;
        Ok(self.inventory_platform.update_item(id, fields).await?)
    }

    pub async fn delete_item(
        &self,
        agent: &Agent,
        id: &Rid,
    ) -> Result<bool, Error> {
        self.get_item_checked(agent, id).await?;
        Ok(self.inventory_platform.delete_item(id).await?)
    }

    pub async fn item_detail(
        &self,
        id: &Rid,
    ) -> Result<ItemDetail, Error> {
        let item = self.get_item(id).await?;
        let categories = self.inventory_platform
            .list_categories_for_item(id)
            .await?;
        let tasks = self.inventory_platform
            .list_tasks_for_target(TargetKind::Item, id)
            .await?;
        Ok(ItemDetail { item, categories, tasks })
    }
}

// Categories.
impl Platform {
    pub async fn create_category(
        &self,
        name: &str,
    ) -> Result<Rid, Error> {
        let name = require_name(name)?;
        Ok(self.inventory_platform.add_category(name).await?)
    }

    pub async fn list_categories(
        &self,
    ) -> Result<Categories, Error> {
        Ok(self.inventory_platform.list_categories().await?)
    }

    pub async fn tag_item(
        &self,
        agent: &Agent,
        item_id: &Rid,
        category_id: &Rid,
    ) -> Result<bool, Error> {
        self.get_item_checked(agent, item_id).await?;
        Ok(self.inventory_platform.tag_item(item_id, category_id).await?)
    }
}

// Coatings.
impl Platform {
    pub async fn create_coating(
        &self,
        agent: &Agent,
        fields: CoatingFields<'_>,
    ) -> Result<Rid, Error> {
        let owner = require_user(agent)?;
        require_name(fields.kind)?;
        Ok(self.inventory_platform.add_coating(owner, fields).await?)
    }

    pub async fn get_coating(
        &self,
        agent: &Agent,
        id: &Rid,
    ) -> Result<Coating, Error> {
        let coating = self.inventory_platform.get_coating_by_id(id).await?;
        if agent.user_id() == Some(coating.owner.as_str()) {
            Ok(coating)
        } else {
            Err(Error::NotFound)
        }
    }

    pub async fn link_coating_to_location(
        &self,
        agent: &Agent,
        coating_id: &Rid,
        location_id: &Rid,
    ) -> Result<bool, Error> {
        self.get_coating(agent, coating_id).await?;
        self.get_location(agent, location_id).await?;
        Ok(self.inventory_platform
            .link_coating_to_location(coating_id, location_id)
            .await?)
    }

    pub async fn link_coating_to_room(
        &self,
        agent: &Agent,
        coating_id: &Rid,
        room_id: &Rid,
    ) -> Result<bool, Error> {
        self.get_coating(agent, coating_id).await?;
        self.get_room(agent, room_id).await?;
        Ok(self.inventory_platform
            .link_coating_to_room(coating_id, room_id)
            .await?)
    }
}

// Tasks.
impl Platform {
    /// The agent must hold the target before a task may be raised
    /// against it; items use the restricted lookup.
    pub async fn create_task(
        &self,
        agent: &Agent,
        target: TaskTarget,
        name: &str,
        description: Option<&str>,
        recurrence: Option<&str>,
        scheduled_ts: Option<i64>,
    ) -> Result<Rid, Error> {
        match target.kind {
            TargetKind::Location => {
                self.get_location(agent, &target.id).await?;
            }
            TargetKind::Room => {
                self.get_room(agent, &target.id).await?;
            }
            TargetKind::Item => {
                self.get_item_checked(agent, &target.id).await?;
            }
        }
        let name = require_name(name)?;
        Ok(self.inventory_platform
            .add_task(&target, name, description, recurrence, scheduled_ts)
            .await?)
    }

    pub async fn get_task(
        &self,
        id: &Rid,
    ) -> Result<Task, Error> {
        Ok(self.inventory_platform.get_task_by_id(id).await?)
    }

    pub async fn list_tasks_for_target(
        &self,
        kind: TargetKind,
        target_id: &Rid,
    ) -> Result<Tasks, Error> {
        Ok(self.inventory_platform
            .list_tasks_for_target(kind, target_id)
            .await?)
    }

    pub async fn list_tasks_for_agent(
        &self,
        agent: &Agent,
    ) -> Result<Tasks, Error> {
        Ok(self.inventory_platform.list_tasks_for_agent(agent).await?)
    }

    pub async fn assign_task_to_group(
        &self,
        task_id: &Rid,
        group_id: &Rid,
    ) -> Result<bool, Error> {
        Ok(self.inventory_platform
            .assign_task_to_group(task_id, group_id)
            .await?)
    }
}

// The dashboard rollup.
impl Platform {
    pub async fn dashboard(
        &self,
        agent: &Agent,
    ) -> Result<Dashboard, Error> {
        let locations = self.inventory_platform
            .list_locations_for_agent(agent)
            .await?;
        let location_ids = locations.iter()
            .map(|location| location.id.clone())
            .collect::<Vec<_>>();
        let rooms = self.inventory_platform
            .list_rooms_by_location_ids(&location_ids)
            .await?;
        let items = self.inventory_platform
            .list_items_by_location_ids(&location_ids)
            .await?;
        let tasks = self.inventory_platform
            .list_tasks_for_agent(agent)
            .await?;
        Ok(Dashboard { locations, rooms, items, tasks })
    }
}
