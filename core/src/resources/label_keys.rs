resource_keys! {
    /// Keys of the `label` resource namespace, used as untranslated field labels
    pub enum LabelKey {
        Address,
        BillingCode,
        CandidateResponseUrl,
        City,
        CompanyName,
        ContactName,
        Country,
        GroupName,
        JobCategory,
        JobDescription,
        Language,
        NotesForInvoice,
        PoNumber,
        ReferenceNumber,
        ResumesEmail,
        SalaryHigh,
        SalaryLow,
        State,
        ZipCode,
    }
}
