//! [`Command`] for attaching a document to a [`Tender`].

use common::operations::{By, Select, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        tender::{self, attachment, Attachment},
        Tender,
    },
    infra::{store, Store},
    Service,
};

use super::Command;

/// [`Command`] for attaching a document to a [`Tender`].
///
/// An [`attachment::Kind::Link`] requires a URL, while an
/// [`attachment::Kind::File`] carries none.
#[derive(Clone, Debug, From)]
pub struct AddAttachment {
    /// ID of the [`Tender`] to attach the document to.
    pub tender_id: tender::Id,

    /// [`attachment::Kind`] of the added [`Attachment`].
    pub kind: attachment::Kind,

    /// Name of the added [`Attachment`].
    pub name: attachment::Name,

    /// URL of the added [`Attachment`], for an
    /// [`attachment::Kind::Link`] one.
    pub url: Option<attachment::Url>,
}

impl<Db, Ai> Command<AddAttachment> for Service<Db, Ai>
where
    Db: Store<
            Select<By<Option<Tender>, tender::Id>>,
            Ok = Option<Tender>,
            Err = Traced<store::Error>,
        > + Store<Update<Tender>, Ok = (), Err = Traced<store::Error>>,
{
    type Ok = Tender;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AddAttachment,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddAttachment {
            tender_id,
            kind,
            name,
            url,
        } = cmd;

        let url = match kind {
            attachment::Kind::Link => {
                Some(url.ok_or(E::UrlMissing).map_err(tracerr::wrap!())?)
            }
            attachment::Kind::File => None,
        };

        let mut tender = self
            .store()
            .execute(Select(By::<Option<Tender>, _>::new(tender_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TenderNotExists(tender_id))
            .map_err(tracerr::wrap!())?;

        tender.attachments.push(Attachment {
            id: attachment::Id::new(),
            kind,
            name,
            url,
        });

        self.store()
            .execute(Update(tender.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(tender)
    }
}

/// Error of [`AddAttachment`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Store`] error.
    #[display("`Store` operation failed: {_0}")]
    Store(store::Error),

    /// [`Tender`] doesn't exist.
    #[display("`Tender(id: {_0})` does not exist")]
    #[from(ignore)]
    TenderNotExists(#[error(not(source))] tender::Id),

    /// No URL is provided for an [`attachment::Kind::Link`].
    #[display("no URL is provided for a link attachment")]
    UrlMissing,
}

#[cfg(test)]
mod spec {
    use common::operations::{All, By, Select};

    use crate::{
        domain::{tender::attachment, Tender},
        infra::{assistant, store::InMemory, Store as _},
        Service,
    };

    use super::{AddAttachment, Command as _, ExecutionError as E};

    async fn service() -> (Service<InMemory, assistant::Static>, Vec<Tender>)
    {
        let store = InMemory::seeded();
        let tenders: Vec<Tender> =
            store.execute(Select(By::<Vec<Tender>, _>::new(All))).await.unwrap();
        let assistant =
            assistant::Static(Err(assistant::Error("unused".into())));
        (Service::new(store, assistant), tenders)
    }

    #[tokio::test]
    async fn link_requires_url() {
        let (service, tenders) = service().await;

        let err = service
            .execute(AddAttachment {
                tender_id: tenders[0].id,
                kind: attachment::Kind::Link,
                name: "Survey results".parse().unwrap(),
                url: None,
            })
            .await
            .unwrap_err();

        let err: E = *err.as_ref();
        assert!(matches!(err, E::UrlMissing));
    }

    #[tokio::test]
    async fn file_carries_no_url() {
        let (service, tenders) = service().await;

        let tender = service
            .execute(AddAttachment {
                tender_id: tenders[0].id,
                kind: attachment::Kind::File,
                name: "site-plan.pdf".parse().unwrap(),
                url: "https://example.com/ignored".parse().ok(),
            })
            .await
            .unwrap();

        let added = tender.attachments.last().unwrap();
        assert_eq!(added.kind, attachment::Kind::File);
        assert_eq!(added.url, None);
    }
}
