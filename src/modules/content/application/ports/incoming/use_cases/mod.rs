mod get_portfolio;
mod import_resume;
mod manage_child;
mod manage_item;
mod manage_section;
mod reorder;
mod update_singletons;

pub use get_portfolio::{
    GetPortfolioError, GetPortfolioUseCase, GetPublishedProjectUseCase, PortfolioView,
};
pub use import_resume::{
    BulletImport, CertificationImport, ContactSettingsImport, EducationImport, ExperienceImport,
    ImportCounts, ImportResult, ImportResumeError, ImportResumeRequest, ImportResumeUseCase,
    ImportValidationError, ProfileImport, ProjectImport, SkillCategoryImport, SkillItemImport,
};
pub use manage_child::{
    AddChildUseCase, ChildPatch, ManageChildError, RemoveChildUseCase, UpdateBulletRequest,
    UpdateChildUseCase, UpdateSkillItemRequest,
};
pub use manage_item::{
    CertificationPatch, CreateSectionItemUseCase, EducationPatch, ExperiencePatch,
    GetSectionItemUseCase, NewSectionItem, ProjectPatch, SectionItemError, SectionItemPatch,
    SkillCategoryPatch, UpdateSectionItemUseCase,
};
pub use manage_section::{
    DeleteSectionItemUseCase, ListSectionUseCase, PublishState, SectionError, SetPublishedUseCase,
};
pub use reorder::{ReorderError, ReorderResult, ReorderUseCase};
pub use update_singletons::{
    SingletonUpdateError, UpdateContactSettingsCommand, UpdateContactSettingsUseCase,
    UpdateProfileCommand, UpdateProfileUseCase,
};
