//! Registration desk service.

use sea_orm::DatabaseConnection;

use crate::{
    model::registration::{RegisterMemberDto, RegistrationDto},
    server::{
        data::{
            member::MemberRepository, project::ProjectRepository,
            registration::RegistrationRepository,
        },
        error::{registration::RegistrationError, Error},
        util::badge::generate_badge_code,
    },
};

pub struct RegistrationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegistrationService<'a> {
    /// Creates a new instance of [`RegistrationService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a member for a project.
    ///
    /// A badge code supplied by the desk must be unused; when omitted, one is
    /// generated. Registering the same member twice for one project is rejected.
    pub async fn register(&self, dto: RegisterMemberDto) -> Result<RegistrationDto, Error> {
        let project_repo = ProjectRepository::new(self.db);
        let member_repo = MemberRepository::new(self.db);
        let registration_repo = RegistrationRepository::new(self.db);

        if project_repo.get(dto.project_id).await?.is_none() {
            return Err(RegistrationError::ProjectNotFound(dto.project_id).into());
        }

        let member = member_repo
            .get(dto.member_id)
            .await?
            .ok_or(RegistrationError::MemberNotFound(dto.member_id))?;

        if registration_repo
            .get_by_project_and_member(dto.project_id, dto.member_id)
            .await?
            .is_some()
        {
            return Err(RegistrationError::AlreadyRegistered {
                member_id: dto.member_id,
                project_id: dto.project_id,
            }
            .into());
        }

        let badge_code = match dto.badge_code {
            Some(code) => {
                if registration_repo.find_by_badge_code(&code).await?.is_some() {
                    return Err(RegistrationError::BadgeCodeTaken(code).into());
                }

                code
            }
            None => generate_badge_code(),
        };

        let registration = registration_repo
            .create(dto.project_id, dto.member_id, Some(badge_code))
            .await?;

        Ok(RegistrationDto {
            id: registration.id,
            project_id: registration.project_id,
            member_id: registration.member_id,
            member_name: format!("{} {}", member.first_name, member.last_name),
            badge_code: registration.badge_code,
            created_at: registration.created_at,
        })
    }

    /// The registration roster for a project, with member names resolved.
    pub async fn roster(&self, project_id: i32) -> Result<Vec<RegistrationDto>, Error> {
        let project_repo = ProjectRepository::new(self.db);
        let registration_repo = RegistrationRepository::new(self.db);

        if project_repo.get(project_id).await?.is_none() {
            return Err(RegistrationError::ProjectNotFound(project_id).into());
        }

        let roster = registration_repo
            .list_with_members(project_id)
            .await?
            .into_iter()
            .filter_map(|(registration, member)| {
                let member = member?;

                Some(RegistrationDto {
                    id: registration.id,
                    project_id: registration.project_id,
                    member_id: registration.member_id,
                    member_name: format!("{} {}", member.first_name, member.last_name),
                    badge_code: registration.badge_code,
                    created_at: registration.created_at,
                })
            })
            .collect();

        Ok(roster)
    }
}
